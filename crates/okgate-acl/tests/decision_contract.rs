//! # Decision Contract Tests
//!
//! Exercises the three public entry points exactly as the webhook layer
//! calls them: `match_trigger`, `match_pattern`, and `is_authorized`.
//! The tables below are the behaviour other components rely on; a failure
//! here means a comment that should (or should not) run a privileged
//! pipeline is now decided differently.

use okgate_acl::{
    is_authorized, match_pattern, match_trigger, AclError, Identity, OwnersFile, TriggerPattern,
    OK_TO_TEST_COMMENT_PATTERN,
};

#[test]
fn trigger_table() {
    let cases = [
        ("bad/match regexp", "foo bar", false),
        ("good/match regexp", "/ok-to-test", true),
        ("good/match regexp newline", "\n/ok-to-test", true),
        ("bad/match regexp newline space", "\n /ok-to-test", false),
        ("good/in the middle", "foo bar\n/ok-to-test\nhello moto", true),
        ("bad/empty", "", false),
        ("bad/quoted", "> /ok-to-test", false),
        ("bad/inline code", "`/ok-to-test`", false),
    ];
    for (name, text, want) in cases {
        assert_eq!(match_trigger(text), want, "{name}");
        assert_eq!(match_pattern(OK_TO_TEST_COMMENT_PATTERN, text), want, "{name}");
    }
}

#[test]
fn pattern_table() {
    assert!(match_pattern(".*", "hello"));
    assert!(!match_pattern("!!!", "foobar"));
    assert!(!match_pattern("(", "anything"));
    assert!(!match_pattern("\\", "\\"));
}

#[test]
fn ownership_table() {
    let doc = "---\napprovers:\n  - allowed\n";
    assert!(is_authorized(doc, "allowed").unwrap());
    assert!(!is_authorized(doc, "notallowed").unwrap());

    for who in ["anyone", "", "allowed"] {
        match is_authorized("bad", who) {
            Err(AclError::DocumentParse(_)) => {}
            other => panic!("expected DocumentParse for {who:?}, got {other:?}"),
        }
    }
}

#[test]
fn reviewers_are_equivalent_to_approvers() {
    let as_approver = "approvers:\n  - dev\n";
    let as_reviewer = "reviewers:\n  - dev\n";
    for who in ["dev", "Dev", "other"] {
        assert_eq!(
            is_authorized(as_approver, who).unwrap(),
            is_authorized(as_reviewer, who).unwrap(),
            "{who}"
        );
    }
}

#[test]
fn repeated_calls_are_identical() {
    let doc = "approvers:\n  - a\nreviewers:\n  - b\n";
    let comment = "lgtm\n/ok-to-test\n";
    for _ in 0..3 {
        assert!(match_trigger(comment));
        assert!(is_authorized(doc, "b").unwrap());
        assert!(!match_pattern("[", comment));
    }
}

#[test]
fn kubernetes_style_owners_file() {
    let doc = r#"# See the OWNERS docs at https://go.k8s.io/owners
options:
  no_parent_owners: true
approvers:
  - chmouel
  - vdemeester
reviewers:
  - sm43
labels:
  - area/pipelines
"#;
    let owners = OwnersFile::parse(doc).unwrap();
    assert_eq!(owners.approvers().len(), 2);
    assert_eq!(owners.reviewers(), ["sm43".to_string()]);

    let sender = Identity::new("sm43");
    assert!(is_authorized(doc, sender.as_str()).unwrap());
    assert!(!is_authorized(doc, "SM43").unwrap());
}

#[test]
fn engine_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TriggerPattern>();
    assert_send_sync::<OwnersFile>();
    assert_send_sync::<AclError>();
}

#[test]
fn concurrent_evaluation_agrees() {
    let doc = "approvers:\n  - allowed\n";
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("comment {i}\n/ok-to-test");
                (match_trigger(&text), is_authorized(doc, "allowed").unwrap())
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, true));
    }
}

#[test]
fn non_string_scalar_logins_authorize() {
    let doc = "approvers:\n  - 1234\n  - true\nreviewers:\n  - \"0042\"\n  - alice\n";
    for who in ["1234", "true", "0042", "alice"] {
        assert!(is_authorized(doc, who).unwrap(), "{who}");
    }
    assert!(!is_authorized(doc, "42").unwrap());
}
