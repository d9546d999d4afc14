pub enum Environment {
    Development,
    Production,
}

/// Decides the runtime environment from the `ENV` variable, falling back
/// to the build profile when it is unset or unrecognized.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match std::env::var("ENV") {
        Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
        Ok(v) if v.eq_ignore_ascii_case("development") => Environment::Development,
        _ => default_env,
    }
}
