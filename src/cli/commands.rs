//! Command dispatch and handlers

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::application::services::visible_sections;
use crate::cli::args::{Cli, Commands, ConfigCommands, HierarchyCommands, MemberCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{can_evaluate, direct_reports, DomainError, JobTitle, Member, Tier};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Hierarchy { command }) => match command {
            HierarchyCommands::Tree => _tree(),
            HierarchyCommands::Titles => _titles(),
            HierarchyCommands::Reports { title } => _reports(title),
            HierarchyCommands::Check {
                leader,
                subordinate,
            } => _check(leader, subordinate),
        },
        Some(Commands::Member { command }) => {
            let container = build_container()?;
            match command {
                MemberCommands::Show { id } => _show(&container, id),
                MemberCommands::List => _list(&container),
                MemberCommands::CanEvaluate {
                    leader_id,
                    subordinate_id,
                } => _can_evaluate(&container, leader_id, subordinate_id),
            }
        }
        Some(Commands::Menu { tier }) => _menu(tier),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn build_container() -> CliResult<ServiceContainer> {
    let settings = Settings::load()?;
    Ok(ServiceContainer::new(settings))
}

#[instrument]
fn _tree() -> CliResult<()> {
    // the founder sits above the table and is rendered separately
    output::header(&format!(
        "{} [{}] (evaluates every title)",
        JobTitle::Fundador,
        JobTitle::Fundador.tier()
    ));
    for root in roots() {
        print!("{}", build_tree(root));
    }
    Ok(())
}

/// Titles that no leader lists, minus the founder.
fn roots() -> Vec<JobTitle> {
    JobTitle::ALL
        .iter()
        .copied()
        .filter(|t| *t != JobTitle::Fundador)
        .filter(|t| {
            !JobTitle::ALL
                .iter()
                .any(|leader| direct_reports(*leader).contains(t))
        })
        .collect()
}

fn build_tree(title: JobTitle) -> Tree<String> {
    Tree::new(format!("{} [{}]", title, title.tier()))
        .with_leaves(direct_reports(title).iter().copied().map(build_tree))
}

#[instrument]
fn _titles() -> CliResult<()> {
    for tier in Tier::ALL.iter().rev() {
        let titles: Vec<_> = JobTitle::ALL
            .iter()
            .filter(|t| t.tier() == *tier)
            .collect();
        if titles.is_empty() {
            continue;
        }
        output::header(tier);
        for title in titles {
            output::detail(title);
        }
    }
    Ok(())
}

#[instrument]
fn _reports(title: &str) -> CliResult<()> {
    let Some(title) = JobTitle::from_name(title) else {
        return Err(CliError::InvalidArgs(format!("unknown title: {title:?}")));
    };
    if title == JobTitle::Fundador {
        output::info(&format!("{} evaluates every title except itself", title));
        return Ok(());
    }
    let reports = direct_reports(title);
    if reports.is_empty() {
        output::info(&format!("{} has no direct reports", title));
    } else {
        output::info(&reports.iter().map(|r| r.name()).join(", "));
    }
    Ok(())
}

#[instrument]
fn _check(leader: &str, subordinate: &str) -> CliResult<()> {
    if can_evaluate(leader, subordinate) {
        output::success(&format!("{leader:?} may evaluate {subordinate:?}"));
    } else {
        output::failure(&format!("{leader:?} may not evaluate {subordinate:?}"));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _show(container: &ServiceContainer, id: &str) -> CliResult<()> {
    let member = container.directory.find(id)?;
    print_member(&member);
    Ok(())
}

#[instrument(skip(container))]
fn _list(container: &ServiceContainer) -> CliResult<()> {
    let members = container.directory.list()?;
    for member in &members {
        print_member(member);
    }
    Ok(())
}

#[instrument(skip(container))]
fn _can_evaluate(
    container: &ServiceContainer,
    leader_id: &str,
    subordinate_id: &str,
) -> CliResult<()> {
    let outcome = container.evaluation.can_evaluate(leader_id, subordinate_id)?;
    let line = format!(
        "{} ({}) -> {} ({})",
        outcome.leader.name, outcome.leader.title, outcome.subordinate.name, outcome.subordinate.title
    );
    if outcome.allowed {
        output::success(&line);
    } else {
        output::failure(&line);
    }
    Ok(())
}

#[instrument]
fn _menu(tier: &str) -> CliResult<()> {
    let tier: Tier = tier
        .parse()
        .map_err(|e: DomainError| CliError::InvalidArgs(e.to_string()))?;
    for section in visible_sections(tier) {
        output::detail(&section);
    }
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let Some(path) = global_config_path() else {
        return Err(CliError::InvalidArgs(
            "cannot determine config directory".to_string(),
        ));
    };
    if path.exists() {
        return Err(CliError::InvalidArgs(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(&path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    output::action("Created", &path.display());
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info(&"no config directory available"),
    }
    let settings = Settings::load()?;
    output::detail(&format!("members_dir: {}", settings.members_dir.display()));
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

fn print_member(member: &Member) {
    output::info(&format!(
        "{}  {}  {} [{}]",
        member.id, member.name, member.title, member.tier
    ));
}
