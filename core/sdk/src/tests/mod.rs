mod run_app_tests;
#[cfg(unix)]
mod scenario_tests;
