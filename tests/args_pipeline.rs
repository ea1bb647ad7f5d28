//! Integration tests for the args pipeline module.

use nssh::args::{
    build_launch_params, classify, flag_registry, tokenize, ArgsError, ClassifiedArgs, EnvSet,
    Target, Token,
};
use nssh::config::LaunchConfig;

fn raw_args(args: Vec<&str>) -> Vec<String> {
    args.into_iter().map(String::from).collect()
}

// =============================================================================
// TOKENIZER TESTS
// =============================================================================

#[test]
fn tokenize_switch_and_value_flag() {
    let args = raw_args(vec!["-A", "-p", "2222"]);
    let tokens = tokenize(&args, &flag_registry()).unwrap();

    assert_eq!(tokens[0], Token::Flag("-A".into()));
    assert!(matches!(
        &tokens[1],
        Token::FlagWithValue { flag, value } if flag == "-p" && value == "2222"
    ));
}

#[test]
fn tokenize_login() {
    let tokens = tokenize(&raw_args(vec!["root@db-1.example"]), &flag_registry()).unwrap();
    assert!(matches!(
        &tokens[0],
        Token::Login { user, host } if user == "root" && host == "db-1.example"
    ));
}

#[test]
fn tokenize_unknown_flag_is_positional() {
    let tokens = tokenize(&raw_args(vec!["-vvv"]), &flag_registry()).unwrap();
    assert_eq!(tokens, vec![Token::Positional("-vvv".into())]);
}

// =============================================================================
// CLASSIFIER TESTS
// =============================================================================

#[test]
fn classify_full_invocation() {
    let args = raw_args(vec![
        "-A", "-o", "ForwardAgent yes", "--list", "web", "--comment", "rack 4", "next",
    ]);
    let c = classify(&args).unwrap();

    assert_eq!(c.passthrough, raw_args(vec!["-A", "-o", "ForwardAgent yes"]));
    assert_eq!(c.list.as_deref(), Some("machines.web"));
    assert_eq!(c.comment.as_deref(), Some("rack 4"));
    assert_eq!(c.target, Some(Target::Next));
}

#[test]
fn classify_preserves_passthrough_order() {
    let args = raw_args(vec!["-L", "8080:localhost:80", "-t", "-i", "key.pem", "host1", "-v"]);
    let c = classify(&args).unwrap();
    assert_eq!(
        c.passthrough,
        raw_args(vec!["-L", "8080:localhost:80", "-t", "-i", "key.pem", "-v"])
    );
    assert_eq!(c.target, Some(Target::Host("host1".into())));
}

#[test]
fn classify_user_at_host() {
    let c = classify(&raw_args(vec!["admin@web1"])).unwrap();
    assert_eq!(c.target, Some(Target::Host("web1".into())));
    assert_eq!(c.passthrough, raw_args(vec!["-o", "User admin"]));
    assert_eq!(c.user.as_deref(), Some("admin"));
}

#[test]
fn classify_user_directive() {
    let c = classify(&raw_args(vec!["next", "--user", "root"])).unwrap();
    assert_eq!(c.target, Some(Target::Next));
    assert_eq!(c.passthrough, raw_args(vec!["-o", "User root"]));
}

#[test]
fn classify_reset() {
    let c = classify(&raw_args(vec!["reset"])).unwrap();
    assert_eq!(c.target, Some(Target::Reset));
}

#[test]
fn classify_last_bare_token_wins() {
    let c = classify(&raw_args(vec!["web1", "web2"])).unwrap();
    assert_eq!(c.target, Some(Target::Host("web2".into())));
}

#[test]
fn classify_without_target() {
    let c = classify(&raw_args(vec!["-v"])).unwrap();
    assert_eq!(c.target, None);
}

#[test]
fn classify_missing_value() {
    let err = classify(&raw_args(vec!["web1", "-o"])).unwrap_err();
    assert_eq!(err, ArgsError::MissingValue { flag: "-o".into() });
    assert!(err.to_string().contains("missing argument value"));
}

#[test]
fn classify_missing_directive_value() {
    for directive in ["--list", "--comment", "--user"] {
        let err = classify(&raw_args(vec!["next", directive])).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { ref flag } if flag == directive));
    }
}

#[test]
fn classify_accounts_for_every_token() {
    let args = raw_args(vec![
        "-4", "-p", "22", "--list", "db", "--comment", "x", "--user", "u", "ops@h1", "-C", "next",
    ]);
    let c = classify(&args).unwrap();

    // two raw user tokens were rewritten into two synthesized `-o` pairs
    let synthesized = 2 * 2;
    let forwarded = c.passthrough.len() - synthesized;
    let directive_tokens = 2 + 2 + 2; // --list, --comment, --user with values
    let target_tokens = 2; // ops@h1 and next
    assert_eq!(forwarded + directive_tokens + target_tokens, args.len());
    assert_eq!(
        c.passthrough,
        raw_args(vec!["-4", "-p", "22", "-o", "User u", "-o", "User ops", "-C"])
    );
}

// =============================================================================
// ENV_BUILDER TESTS
// =============================================================================

#[test]
fn env_set_display_host() {
    let env = EnvSet::new()
        .with_display_host("LC_UI_HOSTNAME", "web1")
        .build();

    assert_eq!(env, vec![("LC_UI_HOSTNAME".into(), "web1".into())]);
}

#[test]
fn env_set_chaining() {
    let env = EnvSet::new()
        .with_display_host("LC_UI_HOSTNAME", "web1")
        .with_extra(vec![("CUSTOM_VAR".into(), "value".into())])
        .build();

    assert_eq!(env.len(), 2);
}

// =============================================================================
// PIPELINE TESTS
// =============================================================================

#[test]
fn launch_params_append_real_host_last() {
    let classified = ClassifiedArgs {
        passthrough: raw_args(vec!["-p", "2222"]),
        ..Default::default()
    };
    let p = build_launch_params(
        &classified,
        "web1",
        "ip-10-0-0-1.internal",
        Some("frontend"),
        &LaunchConfig::default(),
    );

    assert_eq!(p.program, "ssh");
    assert_eq!(p.args, raw_args(vec!["-p", "2222", "ip-10-0-0-1.internal"]));
    assert_eq!(p.display_host, "web1");
    assert_eq!(p.comment.as_deref(), Some("frontend"));
    assert!(p
        .env
        .iter()
        .any(|(k, v)| k == "LC_UI_HOSTNAME" && v == "web1"));
}

#[test]
fn launch_params_include_configured_env() {
    let mut launch = LaunchConfig::default();
    launch.env.insert("LC_TEAM".into(), "ops".into());
    let p = build_launch_params(&ClassifiedArgs::default(), "h", "h", None, &launch);
    assert!(p.env.iter().any(|(k, v)| k == "LC_TEAM" && v == "ops"));
    assert_eq!(p.comment, None);
}

#[test]
fn configured_env_cannot_shadow_display_host() {
    let mut launch = LaunchConfig::default();
    launch
        .env
        .insert(launch.hostname_env.clone(), "wrong".into());
    let p = build_launch_params(&ClassifiedArgs::default(), "web1", "web1.example", None, &launch);
    let last = p.env.iter().rev().find(|(k, _)| *k == launch.hostname_env).unwrap();
    assert_eq!(last.1, "web1");
}
