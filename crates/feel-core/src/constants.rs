/// Default timezone every produced time value is normalized into.
pub const DEFAULT_TZ: &str = "Etc/UTC";

/// Designator separating a wall-clock time from its IANA zone id.
pub const IANA_ZONE_DESIGNATOR: &str = "@";

const TWO_DIGITS: &str = r"\d{2}";

/// ISO-8601 / `xs:time` lexical form: `[T]HH:MM[:SS[.f+]][Z|±HH[:]MM]`.
pub const TIME_ISO_8601_PATTERN: &str = const_str::concat!(
    r"^T?(?P<hour>",
    TWO_DIGITS,
    r"):(?P<minute>",
    TWO_DIGITS,
    r")(?::(?P<second>",
    TWO_DIGITS,
    r")(?:\.(?P<fraction>\d+))?)?(?P<offset>[Zz]|[+-]",
    TWO_DIGITS,
    r":?",
    TWO_DIGITS,
    r")?$"
);

/// IANA-qualified form `HH:MM:SS@Region/City`.
///
/// Every group is optional so that a literal with the right shape but a
/// missing field is still recognized and reported as malformed.
pub const TIME_IANA_TZ_PATTERN: &str = const_str::concat!(
    "^(",
    TWO_DIGITS,
    ")?:?(",
    TWO_DIGITS,
    ")?:?(",
    TWO_DIGITS,
    ")?",
    IANA_ZONE_DESIGNATOR,
    "(.*)$"
);

/// Number of capture groups the IANA pattern must expose.
pub const IANA_CAPTURE_GROUPS: usize = 4;

/// Largest UTC offset accepted in a time literal, in seconds (14:00).
pub const MAX_LITERAL_OFFSET_SECONDS: i32 = 14 * 3600;
