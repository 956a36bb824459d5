/// The environment variable's value, if it is set and not empty.
pub fn non_empty_env(env_var: &str) -> Option<String> {
    std::env::var(env_var).ok().filter(|val| !val.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_and_blank_are_not_set() {
        unsafe {
            std::env::remove_var("ECO_ENV_CHECK_UNSET");
            std::env::set_var("ECO_ENV_CHECK_BLANK", "  ");
            std::env::set_var("ECO_ENV_CHECK_SET", "http://localhost:9000");
        }
        assert_eq!(non_empty_env("ECO_ENV_CHECK_UNSET"), None);
        assert_eq!(non_empty_env("ECO_ENV_CHECK_BLANK"), None);
        assert_eq!(non_empty_env("ECO_ENV_CHECK_SET").as_deref(), Some("http://localhost:9000"));
    }
}
