pub const TABLE_USER: &str = "user";
pub const TABLE_CITY: &str = "city";

pub const REL_FOLLOWS: &str = "follows";
pub const REL_LIVES_IN: &str = "lives_in";

pub const SEED_FILE_USER: &str = "user.csv";
pub const SEED_FILE_CITY: &str = "city.csv";
pub const SEED_FILE_FOLLOWS: &str = "follows.csv";
pub const SEED_FILE_LIVES_IN: &str = "lives-in.csv";

pub const MESSAGE_NO_FRIENDS: &str = "no friends found";
pub const MESSAGE_NO_CITY: &str = "not found";
pub const MESSAGE_NO_RESIDENTS: &str = "no residents found";

/// Table declarations. Every statement is create-if-absent so the whole block
/// can run on each process start.
pub const SCHEMA_DEFINITION: &str = r"
DEFINE TABLE IF NOT EXISTS user SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON TABLE user TYPE string;
DEFINE FIELD IF NOT EXISTS age ON TABLE user TYPE int;

DEFINE TABLE IF NOT EXISTS city SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON TABLE city TYPE string;
DEFINE FIELD IF NOT EXISTS population ON TABLE city TYPE int;

DEFINE TABLE IF NOT EXISTS follows SCHEMAFULL TYPE RELATION IN user OUT user;
DEFINE FIELD IF NOT EXISTS since ON TABLE follows TYPE int;
DEFINE INDEX IF NOT EXISTS follows_in ON TABLE follows FIELDS in;

DEFINE TABLE IF NOT EXISTS lives_in SCHEMAFULL TYPE RELATION IN user OUT city;
DEFINE INDEX IF NOT EXISTS lives_in_in ON TABLE lives_in FIELDS in;
DEFINE INDEX IF NOT EXISTS lives_in_out ON TABLE lives_in FIELDS out;
";

/// Seed tables in load order. Node tables come first because relationship
/// rows reference nodes by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedTable {
    User,
    City,
    Follows,
    LivesIn,
}

impl SeedTable {
    pub const LOAD_ORDER: [Self; 4] = [Self::User, Self::City, Self::Follows, Self::LivesIn];

    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::User => TABLE_USER,
            Self::City => TABLE_CITY,
            Self::Follows => REL_FOLLOWS,
            Self::LivesIn => REL_LIVES_IN,
        }
    }

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::User => SEED_FILE_USER,
            Self::City => SEED_FILE_CITY,
            Self::Follows => SEED_FILE_FOLLOWS,
            Self::LivesIn => SEED_FILE_LIVES_IN,
        }
    }

    /// Name of the query parameter the rows are bound to.
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::City => "cities",
            Self::Follows => "follows",
            Self::LivesIn => "lives_in",
        }
    }

    /// Column names of a seed line, in file order.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::User => &["name", "age"],
            Self::City => &["name", "population"],
            Self::Follows => &["from", "to", "since"],
            Self::LivesIn => &["user", "city"],
        }
    }

    /// Load statement for this table, reading rows from `$<param>`.
    ///
    /// Node rows are created by primary key, so a duplicate name fails the
    /// load. Relationship rows throw when either endpoint is missing.
    #[must_use]
    pub const fn load_statement(self) -> &'static str {
        match self {
            Self::User => {
                r"FOR $row IN $users {
    CREATE type::thing('user', $row.name) CONTENT { name: $row.name, age: $row.age };
};"
            }
            Self::City => {
                r"FOR $row IN $cities {
    CREATE type::thing('city', $row.name) CONTENT { name: $row.name, population: $row.population };
};"
            }
            Self::Follows => {
                r"FOR $row IN $follows {
    LET $src = type::thing('user', $row.from_name);
    LET $dst = type::thing('user', $row.to_name);
    IF $src.id == NONE OR $dst.id == NONE {
        THROW string::concat('follows references a missing user: ', $row.from_name, ' -> ', $row.to_name);
    };
    RELATE $src->follows->$dst SET since = $row.since;
};"
            }
            Self::LivesIn => {
                r"FOR $row IN $lives_in {
    LET $src = type::thing('user', $row.user_name);
    LET $dst = type::thing('city', $row.city_name);
    IF $src.id == NONE OR $dst.id == NONE {
        THROW string::concat('lives_in references a missing record: ', $row.user_name, ' -> ', $row.city_name);
    };
    RELATE $src->lives_in->$dst;
};"
            }
        }
    }
}
