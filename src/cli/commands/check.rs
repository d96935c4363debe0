//! Check command implementation.
//!
//! The `depend-on-all check` command evaluates the rule for each selected
//! module and reports the modules they fail to depend on.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::output::{format_to_string, CheckResult, HumanFormatter, JsonFormatter, OutputFormat};
use crate::reactor::{load_reactor, Reactor};
use crate::rule::{DependOnAllRule, RuleContext};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_MISSING_DEPENDENCIES};
use super::selection::select_targets;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    reactor: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, reactor: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            reactor: reactor.map(Path::to_path_buf),
            args,
        }
    }

    /// Evaluate the rule for every selected module.
    ///
    /// All parameters are resolved before any module is scanned, so a
    /// configuration error never comes with partial results.
    fn run(&self, reactor: &Reactor, ui: &mut dyn UserInterface) -> Result<Vec<CheckResult>> {
        let targets = select_targets(reactor, &self.args.target)?;
        let rules = targets
            .iter()
            .map(|t| DependOnAllRule::from_params(&t.params, reactor.modules()))
            .collect::<Result<Vec<_>>>()?;

        let mut results = Vec::with_capacity(targets.len());
        for (target, rule) in targets.iter().zip(&rules) {
            if ui.output_mode().shows_details() {
                ui.message(&format!(
                    "Checking {} with {}",
                    target.module.coordinates(),
                    rule.describe()
                ));
            }
            let ctx = RuleContext::new(reactor.modules(), target.module, reactor.top_level());
            results.push(CheckResult::new(target.module.clone(), rule.evaluate(&ctx)));
        }
        Ok(results)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reactor = load_reactor(&self.project_root, self.reactor.as_deref())?;
        let results = self.run(&reactor, ui)?;
        let failed = results.iter().filter(|r| !r.outcome.is_passed()).count();

        match self.args.format {
            OutputFormat::Json => {
                let output = format_to_string(&JsonFormatter::new(), &results)?;
                ui.emit(output.trim_end());
            }
            OutputFormat::Human => {
                if failed > 0 {
                    let output = format_to_string(&HumanFormatter::new(), &results)?;
                    ui.emit(output.trim_end());
                    ui.error(&format!(
                        "{} of {} module(s) are missing dependencies",
                        failed,
                        results.len()
                    ));
                } else {
                    ui.success(&format!(
                        "{} module(s) depend on every in-scope project",
                        results.len()
                    ));
                }
            }
        }

        if failed > 0 {
            Ok(CommandResult::failure(EXIT_MISSING_DEPENDENCIES))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TargetArgs;
    use crate::error::RuleError;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    const REACTOR: &str = r#"
group: com.acme
version: 1.0.0
top_level: root
modules:
  - artifact: a
  - artifact: b
  - artifact: root
    packaging: pom
    dependencies:
      - artifact: a
    depend_on_all: {}
"#;

    fn setup_project(reactor: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("reactor.yml"), reactor).unwrap();
        temp
    }

    fn check(temp: &TempDir, args: CheckArgs, ui: &mut MockUI) -> Result<CommandResult> {
        CheckCommand::new(temp.path(), None, args).execute(ui)
    }

    #[test]
    fn reports_missing_dependency() {
        let temp = setup_project(REACTOR);
        let mut ui = MockUI::new();

        let result = check(&temp, CheckArgs::default(), &mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_MISSING_DEPENDENCIES);
        insta::assert_snapshot!(ui.emitted_text(), @r"
        Project 'com.acme:root' is missing dependency 'com.acme:b:jar'.
        Missing definitions from the project 'com.acme:root':
        <!--     Created by depend-on-all rule dependOnAllProjects     -->
        <dependency>
            <groupId>com.acme</groupId>
            <artifactId>b</artifactId>
        </dependency>
        <!--     / Created by depend-on-all rule dependOnAllProjects     -->
        ");
        assert!(ui.has_error("1 of 1 module(s) are missing dependencies"));
    }

    #[test]
    fn passes_when_excluded() {
        let temp = setup_project(REACTOR);
        let mut ui = MockUI::new();
        let mut args = CheckArgs::default();
        args.target.rule.excludes = vec!["com.acme:b".to_string()];

        let result = check(&temp, args, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.emitted().is_empty());
        assert!(ui.has_success("1 module(s) depend on every in-scope project"));
    }

    #[test]
    fn json_format_emits_results() {
        let temp = setup_project(REACTOR);
        let mut ui = MockUI::new();
        let args = CheckArgs {
            format: OutputFormat::Json,
            ..Default::default()
        };

        let result = check(&temp, args, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        let parsed: serde_json::Value = serde_json::from_str(&ui.emitted_text()).unwrap();
        assert_eq!(parsed["results"][0]["module"], "com.acme:root");
        assert_eq!(parsed["results"][0]["missing"][0]["artifact"], "b");
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let temp = setup_project(REACTOR);
        let mut ui = MockUI::new();
        let mut args = CheckArgs::default();
        args.target.rule.includes = vec!["com.acme:ghost".to_string()];
        args.target.rule.error_if_unknown_selector = Some("true".to_string());

        let err = check(&temp, args, &mut ui).unwrap_err();

        assert!(matches!(err, RuleError::UnknownSelector { .. }));
        assert_eq!(
            err.to_string(),
            "Failure in parameter 'includes'. Project 'com.acme:ghost' not found in build"
        );
        assert!(ui.emitted().is_empty());
    }

    #[test]
    fn malformed_flag_is_an_error() {
        let temp = setup_project(REACTOR);
        let mut ui = MockUI::new();
        let mut args = CheckArgs::default();
        args.target.rule.include_root_module = Some("yes".to_string());

        let err = check(&temp, args, &mut ui).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failure in parameter 'include_root_module'. Must be 'true' or 'false': 'yes'"
        );
    }

    #[test]
    fn missing_reactor_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = check(&temp, CheckArgs::default(), &mut ui).unwrap_err();
        assert!(matches!(err, RuleError::ReactorNotFound { .. }));
    }

    #[test]
    fn verbose_mode_announces_each_module() {
        let temp = setup_project(REACTOR);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        let args = CheckArgs {
            target: TargetArgs {
                modules: vec!["a".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };

        check(&temp, args, &mut ui).unwrap();

        assert!(ui.has_message("Checking com.acme:a with DependOnAll[includes=[*]"));
    }
}
