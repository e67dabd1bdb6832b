/*
 * random_sleep.rs - A handy program for testing a process supervisor
 *
 * usage: random_sleep <bound>
 * Prints its pid and a pseudo-random duration below <bound>, then sleeps
 * that many seconds and exits with status 0.
 */

use clap::Parser;
use std::process;
use supervisor_fixtures::cli::RandomSleepArgs;
use supervisor_fixtures::{fixtures, logging, utils};

fn main() {
    logging::init();

    let args = RandomSleepArgs::parse();

    if let Err(err) = fixtures::random_sleep(args.bound) {
        utils::fail(&err);
    }

    process::exit(0);
}
