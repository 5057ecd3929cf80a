use clap::Parser;

use crate::opts::Opts;
use crate::prelude::*;

mod calculator;
mod driver;
mod helpers;
mod opts;
mod prelude;

fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    sentry::configure_scope(|scope| scope.set_tag("app", clap::crate_name!()));

    let result = driver::run(opts);
    if let Err(error) = &result {
        sentry::integrations::anyhow::capture_anyhow(error);
    }
    result
}
