use social_store::models::{CityResult, FriendsResult, Lookup, ResidentsResult};
use social_store::schema::{MESSAGE_NO_CITY, MESSAGE_NO_FRIENDS, MESSAGE_NO_RESIDENTS};
use surrealdb::Connection;

use super::{ControlError, GraphControlPlane};

impl<C: Connection> GraphControlPlane<C> {
    /// Lists the users `name` follows. An unknown user is not an error; it
    /// yields a not-found lookup.
    ///
    /// # Errors
    /// Returns `ControlError` if the store query fails.
    pub async fn get_user_friends(&self, name: &str) -> Result<FriendsResult, ControlError> {
        let friends = self.store.friends_of(name).await?;
        Ok(FriendsResult {
            user: name.to_string(),
            friends: Lookup::from_rows(friends, MESSAGE_NO_FRIENDS),
        })
    }

    /// Fetches the city `name` lives in. Only the first match is returned.
    ///
    /// # Errors
    /// Returns `ControlError` if the store query fails.
    pub async fn get_user_city(&self, name: &str) -> Result<CityResult, ControlError> {
        let city = self.store.city_of(name).await?;
        Ok(CityResult {
            user: name.to_string(),
            city: Lookup::from_option(city, MESSAGE_NO_CITY),
        })
    }

    /// Lists users living in `city_name`.
    ///
    /// # Errors
    /// Returns `ControlError` if the store query fails.
    pub async fn get_city_residents(
        &self,
        city_name: &str,
    ) -> Result<ResidentsResult, ControlError> {
        let residents = self.store.residents_of(city_name).await?;
        Ok(ResidentsResult {
            city: city_name.to_string(),
            residents: Lookup::from_rows(residents, MESSAGE_NO_RESIDENTS),
        })
    }
}
