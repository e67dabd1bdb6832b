use clap::Parser;
use std::num::NonZeroU64;

/// Upper bound used by `random_sleep_fixed`.
pub const FIXED_SLEEP_BOUND: NonZeroU64 = match NonZeroU64::new(4) {
    Some(bound) => bound,
    None => panic!("sleep bound must be nonzero"),
};

/// Sleep for a pseudo-random whole number of seconds below BOUND
#[derive(Debug, Parser)]
#[command(name = "random_sleep", disable_help_flag = true)]
pub struct RandomSleepArgs {
    /// Exclusive upper bound on the sleep, in seconds (at least 1)
    pub bound: NonZeroU64,

    /// Anything after the bound is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}
