//! Describe command implementation.
//!
//! The `depend-on-all describe` command prints the resolved rule
//! configuration for each selected module without checking anything.

use std::path::{Path, PathBuf};

use crate::cli::args::TargetArgs;
use crate::error::Result;
use crate::reactor::load_reactor;
use crate::rule::DependOnAllRule;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::selection::select_targets;

/// The describe command implementation.
pub struct DescribeCommand {
    project_root: PathBuf,
    reactor: Option<PathBuf>,
    args: TargetArgs,
}

impl DescribeCommand {
    /// Create a new describe command.
    pub fn new(project_root: &Path, reactor: Option<&Path>, args: TargetArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            reactor: reactor.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for DescribeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reactor = load_reactor(&self.project_root, self.reactor.as_deref())?;

        let targets = select_targets(&reactor, &self.args)?;
        let rules = targets
            .iter()
            .map(|t| DependOnAllRule::from_params(&t.params, reactor.modules()))
            .collect::<Result<Vec<_>>>()?;

        for (target, rule) in targets.iter().zip(&rules) {
            ui.emit(&format!(
                "{}: {}",
                target.module.coordinates(),
                rule.describe()
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("reactor.yml"),
            r#"
group: g
version: "1"
top_level: root
modules:
  - artifact: a
  - artifact: root
    packaging: pom
    depend_on_all:
      includes: ["g:*", "other"]
      excludes: ["g:docs"]
      include_root_module: true
"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn prints_resolved_configuration() {
        let temp = setup_project();
        let mut ui = MockUI::new();

        let result = DescribeCommand::new(temp.path(), None, TargetArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(
            ui.emitted(),
            ["g:root: DependOnAll[includes=[g:*, other];excludes=[g:docs];include_root_module=true;error_if_unknown_selector=false]".to_string()]
        );
    }

    #[test]
    fn defaults_for_unconfigured_module() {
        let temp = setup_project();
        let mut ui = MockUI::new();
        let args = TargetArgs {
            modules: vec!["a".to_string()],
            ..Default::default()
        };

        DescribeCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.emitted_text(),
            "g:a: DependOnAll[includes=[*];excludes=[];include_root_module=false;error_if_unknown_selector=false]"
        );
    }

    #[test]
    fn invalid_selector_fails() {
        let temp = setup_project();
        let mut ui = MockUI::new();
        let mut args = TargetArgs::default();
        args.rule.excludes = vec!["a:b:c:d".to_string()];

        let err = DescribeCommand::new(temp.path(), None, args)
            .execute(&mut ui)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failure in parameter 'excludes'. String is invalid: 'a:b:c:d'"
        );
    }

    #[test]
    fn later_configuration_error_prints_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("reactor.yml"),
            r#"
group: g
version: "1"
top_level: root
modules:
  - artifact: a
    depend_on_all: {}
  - artifact: root
    packaging: pom
    depend_on_all:
      include_root_module: maybe
"#,
        )
        .unwrap();
        let mut ui = MockUI::new();

        let result =
            DescribeCommand::new(temp.path(), None, TargetArgs::default()).execute(&mut ui);

        assert!(result.is_err());
        assert!(ui.emitted().is_empty());
    }
}
