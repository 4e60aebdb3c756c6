//! Role-hierarchy evaluation engine
//!
//! The leader→direct-reports table is compiled in, immutable and consulted
//! by pure functions only. Evaluation permission means direct supervision:
//! the relation is not transitively closed, so a supervisor may evaluate
//! the chiefs it lists but not the specialists those chiefs lead.

use crate::domain::title::JobTitle;

/// Titles a leader directly leads, one tier below.
///
/// `Fundador` keeps an empty entry here; the evaluation path short-circuits
/// on the founder rule before this table is consulted, see [`evaluates`].
pub fn direct_reports(leader: JobTitle) -> &'static [JobTitle] {
    use JobTitle::*;
    match leader {
        DiretorGeral => &[DiretorClinico, DiretorAdministrativo],
        DiretorClinico => &[SupervisorClinico],
        DiretorAdministrativo => &[SupervisorAdministrativo],
        SupervisorClinico => &[
            ChefeDeCirurgia,
            ChefeDePediatria,
            ChefeDeEnfermagem,
            ChefeDeLaboratorio,
            ChefeDeEnsino,
        ],
        SupervisorAdministrativo => &[ChefeDeRecepcao, ChefeDeFarmacia],
        ChefeDeCirurgia => &[Cirurgia],
        ChefeDePediatria => &[Pediatria],
        ChefeDeEnfermagem => &[Enfermagem],
        ChefeDeLaboratorio => &[Analista],
        ChefeDeEnsino => &[Instrutor],
        ChefeDeRecepcao => &[Recepcao],
        ChefeDeFarmacia => &[Farmacia],
        Instrutor => &[Residente],
        Residente => &[Interno],
        Interno => &[Estagiario],
        Estagiario => &[Recruta],
        // never consulted by the evaluation path
        Fundador => &[],
        // leaf titles: evaluate nobody
        Cirurgia | Pediatria | Enfermagem | Analista | Recepcao | Farmacia | Recruta => &[],
    }
}

/// Typed evaluation-permission query.
///
/// `Fundador` evaluates every title except another `Fundador`; everyone
/// else evaluates exactly their direct reports.
pub fn evaluates(leader: JobTitle, subordinate: JobTitle) -> bool {
    if leader == JobTitle::Fundador {
        return subordinate != JobTitle::Fundador;
    }
    direct_reports(leader).contains(&subordinate)
}

/// Evaluation-permission query over raw title strings.
///
/// Total over any pair of strings: empty or unknown input degrades to
/// `false`, nothing is raised. Comparison is exact and case-sensitive.
///
/// The empty-input guard protects against malformed upstream records; it is
/// not a domain rule. The founder short-circuit runs before any table
/// lookup and holds even for subordinate strings that are no known title.
pub fn can_evaluate(leader: &str, subordinate: &str) -> bool {
    if leader.is_empty() || subordinate.is_empty() {
        return false;
    }
    if leader == JobTitle::Fundador.name() {
        return subordinate != JobTitle::Fundador.name();
    }
    let Some(leader) = JobTitle::from_name(leader) else {
        return false;
    };
    direct_reports(leader)
        .iter()
        .any(|report| report.name() == subordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::title::Tier;

    #[test]
    fn given_the_table_when_checking_tiers_then_reports_sit_one_tier_below() {
        for leader in JobTitle::ALL {
            for report in direct_reports(leader) {
                assert_eq!(
                    report.tier().rank() + 1,
                    leader.tier().rank(),
                    "{} -> {} crosses more than one tier",
                    leader,
                    report
                );
            }
        }
    }

    #[test]
    fn given_the_table_when_scanning_members_then_each_title_has_one_leader_at_most() {
        for title in JobTitle::ALL {
            let leaders = JobTitle::ALL
                .iter()
                .filter(|l| direct_reports(**l).contains(&title))
                .count();
            assert!(leaders <= 1, "{} is listed by {} leaders", title, leaders);
        }
    }

    #[test]
    fn given_every_non_founder_title_when_not_n9_then_someone_lists_it() {
        // every title below the general director is reachable as a member
        for title in JobTitle::ALL {
            if title == JobTitle::Fundador || title.tier() == Tier::N9 {
                continue;
            }
            let led = JobTitle::ALL
                .iter()
                .any(|l| direct_reports(*l).contains(&title));
            assert!(led, "{} is listed by no leader", title);
        }
    }
}
