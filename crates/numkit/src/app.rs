//! Application entry point and dispatch.

use anyhow::{Context, Result};

use numkit_cli::presenter::{CLIResultPresenter, JsonResultPresenter, ResultPresenter};
use numkit_cli::ui;
use numkit_core::{calculate, factorial_with_options, find_max, Options};

use crate::config::{AppConfig, Command};
use crate::version;

/// Operands used by the `demo` command.
pub const DEMO_OPERANDS: (f64, f64) = (10.0, 3.0);

/// Sequence scanned by the `demo` command.
pub const DEMO_VALUES: [f64; 6] = [3.0, 7.0, 2.0, 9.0, 1.0, 5.0];

/// Factorial input used by the `demo` command.
pub const DEMO_FACTORIAL: i64 = 5;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        numkit_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    let opts = config.options();
    let presenter = make_presenter(config, &opts);
    let command = config.command();
    tracing::debug!(version = %version::full_version(), ?command, "dispatching");

    match command {
        Command::Max { values } => run_max(presenter.as_ref(), &values),
        Command::Factorial { n } => run_factorial(presenter.as_ref(), n, &opts)?,
        Command::Calc { x, y } => run_calc(presenter.as_ref(), x, y)?,
        Command::Demo => run_demo(config, presenter.as_ref(), &opts)?,
    }
    Ok(())
}

/// Print an error the way the selected output mode expects.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    make_presenter(config, &config.options()).present_error(&format!("{err:#}"));
}

fn make_presenter(config: &AppConfig, opts: &Options) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonResultPresenter::new())
    } else {
        Box::new(CLIResultPresenter::new(
            config.verbose,
            config.quiet,
            opts.precision,
        ))
    }
}

fn run_max(presenter: &dyn ResultPresenter, values: &[f64]) {
    let max = find_max(values);
    if values.iter().any(|v| v.is_nan()) {
        ui::print_warning("input contains NaN; NaN never replaces an earlier maximum");
    }
    presenter.present_max(values, max);
}

fn run_factorial(presenter: &dyn ResultPresenter, n: i64, opts: &Options) -> Result<()> {
    let value = factorial_with_options(n, opts).with_context(|| format!("factorial({n})"))?;
    presenter.present_factorial(n, &value);
    Ok(())
}

fn run_calc(presenter: &dyn ResultPresenter, x: f64, y: f64) -> Result<()> {
    let result = calculate(x, y).with_context(|| format!("calc({x}, {y})"))?;
    if !result.is_division_defined() {
        tracing::debug!(x, "division by zero; quotient undefined");
    }
    presenter.present_calculation(x, y, &result);
    Ok(())
}

fn run_demo(config: &AppConfig, presenter: &dyn ResultPresenter, opts: &Options) -> Result<()> {
    let show_headers = !config.quiet && !config.json;

    if show_headers {
        ui::print_header("Multiple return values");
    }
    let (x, y) = DEMO_OPERANDS;
    run_calc(presenter, x, y)?;

    if show_headers {
        println!();
        ui::print_header("Processing a list");
    }
    run_max(presenter, &DEMO_VALUES);

    if show_headers {
        println!();
        ui::print_header("Recursion");
    }
    run_factorial(presenter, DEMO_FACTORIAL, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use numkit_core::CalcError;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("numkit").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn run_each_command() {
        for args in [
            &["max", "1", "2"][..],
            &["max"][..],
            &["factorial", "5"][..],
            &["calc", "10", "0"][..],
            &["demo", "--json"][..],
        ] {
            assert!(run(&config(args)).is_ok(), "args: {args:?}");
        }
    }

    #[test]
    fn negative_factorial_fails_with_domain_error() {
        let err = run(&config(&["factorial", "-2"])).unwrap_err();
        assert_eq!(err.downcast_ref::<CalcError>(), Some(&CalcError::Domain(-2)));
    }

    #[test]
    fn factorial_above_limit_fails() {
        let err = run(&config(&["factorial", "11", "--max-factorial", "10"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CalcError>(),
            Some(CalcError::TooLarge { n: 11, limit: 10 })
        ));
    }

    #[test]
    fn oversized_factorial_limit_is_config_error() {
        let err = run(&config(&["factorial", "200000", "--max-factorial", "1000000"]))
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<CalcError>(), Some(CalcError::Config(_))));
    }

    #[test]
    fn precision_flows_through_options() {
        let config = config(&["calc", "1", "3", "--precision", "5"]);
        assert_eq!(config.options().precision, 5);
        assert!(run(&config).is_ok());
    }

    #[test]
    fn invalid_config_fails() {
        let err = run(&config(&["demo", "--precision", "99"])).unwrap_err();
        assert!(matches!(err.downcast_ref::<CalcError>(), Some(CalcError::Config(_))));
    }

    #[test]
    fn demo_values_maximum() {
        assert_eq!(find_max(&DEMO_VALUES), Some(9.0));
    }
}
