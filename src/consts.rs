/// Number of characters in a well-formed IIN
pub const IIN_LENGTH: usize = 12;

/// Number of leading digits covered by the checksum (everything but the
/// trailing control digit)
pub(crate) const PAYLOAD_LENGTH: usize = IIN_LENGTH - 1;

/// Lowest valid century digit (7th character)
pub const MIN_CENTURY_DIGIT: u8 = 1;

/// Highest valid century digit
pub const MAX_CENTURY_DIGIT: u8 = 6;

/// Year offset applied for century digits 1 and 2
pub(crate) const CENTURY_OFFSET_1900: u16 = 1900;

/// Year offset applied for century digits 3 and 4
pub(crate) const CENTURY_OFFSET_2000: u16 = 2000;

/// Modulus of the control-digit scheme
pub(crate) const CHECKSUM_MODULUS: u32 = 11;

/// Remainder that cannot serve as a control digit (digits are 0-9)
pub(crate) const COLLISION_REMAINDER: u32 = 10;

/// First-pass checksum weights: digit at position `i` is weighted by `i + 1`
pub(crate) const PRIMARY_WEIGHTS: [u32; PAYLOAD_LENGTH] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Second-pass weights, used when the first pass lands on remainder 10:
/// position `i` is weighted by `(i + 3) mod 11`, with 0 replaced by 11
pub(crate) const SECONDARY_WEIGHTS: [u32; PAYLOAD_LENGTH] = [3, 4, 5, 6, 7, 8, 9, 10, 11, 1, 2];

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
