use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

const DICTIONARY: &str = r#"{
  "home": { "title": "首页", "subtitle": "欢迎" },
  "nav": { "home": "@:home.title" },
  "unused": "没用"
}"#;

const APP_VUE: &str = r#"<template>
  <h1>{{ $t('home.title') }}</h1>
  <p>{{ t("home.subtitle", { name }) }}</p>
  <a>{{ $t('nav.home') }}</a>
</template>
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_dictionary(DICTIONARY)?;
    test.write_file("src/App.vue", APP_VUE)?;
    Ok(test)
}

#[test]
fn test_search_lists_used_keys_in_order() -> Result<()> {
    let test = project()?;

    let output = test.search_command("src/App.vue").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    src/App.vue:2:10  home.title     首页
    src/App.vue:3:9   home.subtitle  欢迎
    src/App.vue:4:9   nav.home       首页
    ✓ 3 keys used in src/App.vue
    ");

    Ok(())
}

#[test]
fn test_search_filter_matches_value() -> Result<()> {
    let test = project()?;

    let output = test
        .search_command("src/App.vue")
        .args(["--filter", "首页"])
        .output()?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r#"
    src/App.vue:2:10  home.title  首页
    src/App.vue:4:9   nav.home    首页
    ✓ 2 keys used in src/App.vue matching "首页"
    "#);

    Ok(())
}

#[test]
fn test_search_filter_matches_key_case_insensitively() -> Result<()> {
    let test = project()?;

    let output = test
        .search_command("src/App.vue")
        .args(["--filter", "SUBTITLE"])
        .output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("home.subtitle"));
    assert!(!stdout(&output).contains("home.title"));

    Ok(())
}

#[test]
fn test_search_no_usage() -> Result<()> {
    let test = project()?;
    test.write_file("src/Empty.vue", "<template><p>hello</p></template>\n")?;

    let output = test.search_command("src/Empty.vue").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ No dictionary keys are used in src/Empty.vue.\n"
    );

    Ok(())
}

#[test]
fn test_search_quoted_but_not_called() -> Result<()> {
    let test = project()?;
    test.write_file("src/keys.js", "const key = 'home.title';\n")?;

    let output = test.search_command("src/keys.js").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No dictionary keys are used"));

    Ok(())
}

#[test]
fn test_search_without_dictionary() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    let output = test.search_command("src/App.vue").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ No dictionary loaded. Check the dictionary path in .keyseekrc.json.\n"
    );
    assert!(stderr(&output).contains("error: No dictionary path was provided."));

    Ok(())
}

#[test]
fn test_search_empty_dictionary() -> Result<()> {
    let test = CliTest::with_dictionary("{}")?;
    test.write_file("src/App.vue", APP_VUE)?;

    let output = test.search_command("src/App.vue").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("contains no entries."));

    Ok(())
}

#[test]
fn test_search_custom_functions() -> Result<()> {
    let test = CliTest::with_file("zh.json", DICTIONARY)?;
    test.write_file(
        ".keyseekrc.json",
        r#"{ "dictionaryPath": "zh.json", "functions": ["i18n.t"] }"#,
    )?;
    test.write_file(
        "main.js",
        "i18n.t('home.title');\n$t('home.subtitle');\n",
    )?;

    let output = test.search_command("main.js").output()?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    main.js:1:1  home.title  首页
    ✓ 1 key used in main.js
    ");

    Ok(())
}

#[test]
fn test_search_unreadable_file() -> Result<()> {
    let test = project()?;

    let output = test.search_command("src/Missing.vue").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read file: src/Missing.vue"));

    Ok(())
}

#[test]
fn test_search_invalid_config() -> Result<()> {
    let test = project()?;
    test.write_file(".keyseekrc.json", r#"{ "functions": [] }"#)?;

    let output = test.search_command("src/App.vue").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: "));

    Ok(())
}
