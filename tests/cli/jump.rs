use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

const DICTIONARY: &str = r#"{
  "home": { "title": "首页", "subtitle": "欢迎" },
  "nav": { "home": "@:home.title" }
}"#;

const APP_VUE: &str = r#"<template>
  <h1>{{ $t('home.title') }}</h1>
  <p>{{ $t('home.title') }}</p>
  <span>{{ $t("home.subtitle") }}</span>
</template>
<script>
const fallback = 'home.title';
</script>
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_dictionary(DICTIONARY)?;
    test.write_file("src/App.vue", APP_VUE)?;
    Ok(test)
}

#[test]
fn test_jump_single_occurrence() -> Result<()> {
    let test = project()?;

    let output = test.jump_command("src/App.vue", "home.subtitle").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "src/App.vue:4:15\n");

    Ok(())
}

#[test]
fn test_jump_multiple_occurrences() -> Result<()> {
    let test = project()?;

    let output = test.jump_command("src/App.vue", "home.title").output()?;
    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r#"
    "home.title" occurs 3 times in src/App.vue:
      [1] src/App.vue:2:13  <h1>{{ $t('home.title') }}</h1>
      [2] src/App.vue:3:12  <p>{{ $t('home.title') }}</p>
      [3] src/App.vue:7:18  const fallback = 'home.title';
    Run with --pick <N> to choose one.
    "#);

    Ok(())
}

#[test]
fn test_jump_pick_candidate() -> Result<()> {
    let test = project()?;

    let output = test
        .jump_command("src/App.vue", "home.title")
        .args(["--pick", "3"])
        .output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "src/App.vue:7:18\n");

    Ok(())
}

#[test]
fn test_jump_pick_out_of_range() -> Result<()> {
    let test = project()?;

    let output = test
        .jump_command("src/App.vue", "home.title")
        .args(["--pick", "4"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: --pick 4 is out of range: \"home.title\" occurs 3 times\n"
    );

    let output = test
        .jump_command("src/App.vue", "home.title")
        .args(["--pick", "0"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_jump_key_not_used() -> Result<()> {
    let test = project()?;

    let output = test.jump_command("src/App.vue", "nav.home").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ Key \"nav.home\" is not used in src/App.vue.\n"
    );

    Ok(())
}

#[test]
fn test_jump_key_with_pattern_characters() -> Result<()> {
    let test = CliTest::with_dictionary(r#"{"price": {"a+b (usd)": "价格"}}"#)?;
    test.write_file(
        "src/price.js",
        "t('price.a+b (usd)');\nconst wrong = 'priceXa+b (usd)';\n",
    )?;

    let output = test
        .jump_command("src/price.js", "price.a+b (usd)")
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "src/price.js:1:3\n");

    Ok(())
}

#[test]
fn test_jump_without_dictionary() -> Result<()> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;

    let output = test.jump_command("src/App.vue", "home.title").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No dictionary loaded."));

    Ok(())
}
