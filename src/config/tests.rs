// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;

    fn parse(args: &[&str]) -> RouterConfig {
        let mut argv = vec!["tplink-router-status"];
        argv.extend_from_slice(args);
        RouterConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--host", "192.168.1.1", "--password", "secret"]);
        assert_eq!(config.host, "192.168.1.1");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "secret");
        assert!(!config.https);
        assert!(!config.verify_ssl);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "--host",
            "router.lan",
            "--username",
            "root",
            "--password",
            "pw",
            "--https",
            "--verify-ssl",
            "--timeout",
            "5",
        ]);
        assert_eq!(config.username, "root");
        assert!(config.https);
        assert!(config.verify_ssl);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_host_is_required() {
        let result = RouterConfig::try_parse_from(["tplink-router-status", "--password", "x"]);
        if std::env::var(env_vars::HOST).is_err() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_base_url_scheme() {
        let mut config = parse(&["--host", "192.168.1.1", "--password", "x"]);
        assert_eq!(config.base_url(), "http://192.168.1.1");
        assert!(!config.uses_https());

        config.https = true;
        assert_eq!(config.base_url(), "https://192.168.1.1");
        assert!(config.uses_https());
    }

    #[test]
    fn test_base_url_explicit_scheme_wins() {
        let mut config = parse(&["--host", "http://10.0.0.1:8080/", "--password", "x"]);
        config.https = true;
        assert_eq!(config.base_url(), "http://10.0.0.1:8080");
        assert!(!config.uses_https());
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        let config = parse(&["--host", "  ", "--password", "x"]);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_username() {
        let config = parse(&["--host", "192.168.1.1", "--username", "", "--password", "x"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Username cannot be empty"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = parse(&["--host", "192.168.1.1", "--password", "x", "--timeout", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_password() {
        let config = parse(&["--host", "192.168.1.1", "--password", ""]);
        assert!(config.validate().is_ok());
    }
}
