use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const REFERENCE: &str =
    r#"{"Common": {"btn": {"submit": "Submit"}}, "Errors": {"404": "Not found"}}"#;

#[test]
fn test_audit_with_no_arguments() -> Result<()> {
    let test = CliTest::with_file("messages/ko.json", REFERENCE)?;
    test.write_file(
        "app/page.tsx",
        r#"
  export function Page() {
      return (
          <div>
              <button>{t('submit')}</button>
              <p>{t.rich('btn.submit')}</p>
              <span>{t('missingKey')}</span>
          </div>
      );
  }
  "#,
    )?;

    let output = test.command().output()?;

    assert_eq!(
        String::from_utf8(output.stdout)?,
        "--- Translation Key Audit ---\n\
         Loaded 2 keys from messages/ko.json\n\
         Found 3 t() calls\n\
         \u{2713} Verified 2 usages.\n\
         \n\
         1 Suspicious Usages (Potentially Missing or Dynamic):\n\
         \x20 - 'missingKey' in page.tsx\n"
    );
    // Suspicious findings are not a failure
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_audit_missing_reference_aborts_before_scan() -> Result<()> {
    let test = CliTest::with_file("app/page.tsx", "t('whatever')")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stderr,
        "Error: Reference file 'messages/ko.json' not found\n"
    );

    Ok(())
}

#[test]
fn test_audit_malformed_reference_is_fatal() -> Result<()> {
    let test = CliTest::with_file("messages/ko.json", "{ not json }")?;
    test.write_file("app/page.tsx", "t('whatever')")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse reference file"));
    assert!(stderr.contains("messages/ko.json"));

    Ok(())
}

#[test]
fn test_audit_ignores_dependency_and_build_directories() -> Result<()> {
    let test = CliTest::with_file("messages/ko.json", r#"{"Common": {"ok": "OK"}}"#)?;
    test.write_file("app/page.tsx", "t('ok')")?;
    test.write_file("node_modules/pkg/index.tsx", "t('hidden')")?;
    test.write_file(".next/static/chunk.tsx", "t('built')")?;
    test.write_file(".git/hooks/hook.ts", "t('vcs')")?;

    let output = test.command().output()?;

    assert_eq!(
        String::from_utf8(output.stdout)?,
        "--- Translation Key Audit ---\n\
         Loaded 1 keys from messages/ko.json\n\
         Found 1 t() calls\n\
         \u{2713} Verified 1 usages.\n"
    );

    Ok(())
}

#[test]
fn test_audit_skips_non_literal_arguments() -> Result<()> {
    let test = CliTest::with_file("messages/ko.json", r#"{"Common": {"ok": "OK"}}"#)?;
    test.write_file(
        "app/page.tsx",
        "const key = 'Common.ok';\nconst label = t(key);\n",
    )?;

    let output = test.command().output()?;

    assert_eq!(
        String::from_utf8(output.stdout)?,
        "--- Translation Key Audit ---\n\
         Loaded 1 keys from messages/ko.json\n\
         Found 0 t() calls\n\
         \u{2713} Verified 0 usages.\n"
    );

    Ok(())
}

#[test]
fn test_audit_reads_reference_from_config_file() -> Result<()> {
    let test = CliTest::with_file(".keyauditrc.json", r#"{ "referenceFile": "i18n/base.json" }"#)?;
    test.write_file("i18n/base.json", r#"{"Auth": {"title": "Login"}}"#)?;
    test.write_file("app/login.tsx", "t('title')")?;

    let output = test.command().output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Loaded 1 keys from i18n/base.json"));
    assert!(stdout.contains("Verified 1 usages."));
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_audit_reference_file_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("custom/en.json", r#"{"Home": {"title": "Home"}}"#)?;
    test.write_file("app/home.tsx", "t('Home.title')")?;

    let output = test
        .audit_command()
        .arg("--reference-file")
        .arg("custom/en.json")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Loaded 1 keys from custom/en.json"));
    assert!(stdout.contains("Verified 1 usages."));

    Ok(())
}

#[test]
fn test_audit_source_root_flag_limits_scan() -> Result<()> {
    let test = CliTest::with_file("messages/ko.json", r#"{"Common": {"ok": "OK"}}"#)?;
    test.write_file("src/app.tsx", "t('ok')")?;
    test.write_file("scripts/tool.ts", "t('unrelated')")?;

    let output = test
        .audit_command()
        .arg("--source-root")
        .arg("src")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Found 1 t() calls"));
    assert!(stdout.contains("Verified 1 usages."));

    Ok(())
}

#[test]
fn test_audit_suffix_match_accepts_namespace_relative_keys() -> Result<()> {
    let test = CliTest::with_file(
        "messages/ko.json",
        r#"{"Settings": {"profile": {"name": "Name", "avatar": "Avatar"}}}"#,
    )?;
    test.write_file(
        "app/settings.tsx",
        "t('profile.name'); t('avatar'); t('profile.email')",
    )?;

    let output = test.command().output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Found 3 t() calls"));
    assert!(stdout.contains("Verified 2 usages."));
    assert!(stdout.contains("1 Suspicious Usages"));
    assert!(stdout.contains("- 'profile.email' in settings.tsx"));

    Ok(())
}
