/// Seconds per hour, the unit the divisor-form rate is quoted in.
pub const SECONDS_PER_HOUR: i128 = 3600;

/// Fixed-point scaling factor for the per-second rate encoding.
///
/// The pool rate can be quoted two ways: "hourly divisor D" (each hour a
/// stake earns `balance / D`) or an explicit per-second fractional rate
/// scaled by 10^18. The divisor form is the canonical one stored on-chain;
/// the conversions below keep the two encodings a single source of truth.
pub const RATE_SCALE: i128 = 1_000_000_000_000_000_000;

// ── Rate conversions ────────────────────────────────────────────────────────

/// Canonical internal rate: the divisor applied per *second*.
///
/// `hourly_divisor = 1000` (0.1 %/hour) becomes `3_600_000`, so that
/// `balance × elapsed_seconds / rate_divisor` yields the hourly convention
/// exactly at `elapsed = 3600`.
pub fn rate_divisor(hourly_divisor: i128) -> i128 {
    hourly_divisor.saturating_mul(SECONDS_PER_HOUR)
}

/// Recover the hourly-divisor quote from the canonical per-second divisor.
///
/// Exact inverse of [`rate_divisor`]: the stored value is always a
/// multiple of [`SECONDS_PER_HOUR`].
pub fn hourly_divisor(rate_divisor: i128) -> i128 {
    rate_divisor / SECONDS_PER_HOUR
}

/// The equivalent 10^18-scaled per-second rate for a given divisor.
///
/// Truncates: `rate_divisor = 3_600_000` maps to `277_777_777_777`
/// (≈ 2.777 × 10^-7 per second). Informational only; accrual never uses
/// this form, so the truncation cannot leak into payouts.
pub fn per_second_rate_scaled(rate_divisor: i128) -> i128 {
    if rate_divisor <= 0 {
        return 0;
    }
    RATE_SCALE / rate_divisor
}

/// Canonical divisor for a pool quoted as a 10^18-scaled per-second rate.
///
/// `rate_scaled = 100_000_000_000_000` (0.0001/second) maps to a divisor
/// of `10_000`. Exact whenever the quoted rate divides [`RATE_SCALE`];
/// otherwise truncates toward a slightly *larger* divisor, i.e. a slightly
/// lower effective rate, never a higher one.
pub fn divisor_from_per_second_rate(rate_scaled: i128) -> i128 {
    if rate_scaled <= 0 {
        return 0;
    }
    RATE_SCALE / rate_scaled
}

// ── Core accrual ────────────────────────────────────────────────────────────

/// Reward accrued by a stake of `balance` over `elapsed` seconds.
///
/// ```text
/// reward = balance × elapsed / rate_divisor
/// ```
///
/// Integer arithmetic, truncating toward zero: the pool may underpay by a
/// fraction of a unit but can never pay out more than funded. Zero balance
/// or zero elapsed time accrues nothing regardless of the other operand.
#[allow(clippy::arithmetic_side_effects)]
pub fn pending_reward(balance: i128, elapsed: u64, rate_divisor: i128) -> i128 {
    if balance <= 0 || rate_divisor <= 0 {
        return 0;
    }

    // elapsed is u64; the cast to i128 is lossless.
    balance.saturating_mul(elapsed as i128) / rate_divisor
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.
