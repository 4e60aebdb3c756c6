//! Job titles and hierarchical tiers

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Hierarchical level ("nível"), used for menu visibility.
///
/// Tiers classify titles coarsely: N1 is the lowest staff rank, N10 the
/// founder. N0 carries no job title at all; it is the visitor tier and only
/// ever selects the minimal menu.
///
/// Tiers are NOT consulted by the evaluation engine. Who may evaluate whom
/// is decided by title, see [`crate::domain::hierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    N0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    N10,
}

impl Tier {
    pub const ALL: [Tier; 11] = [
        Tier::N0,
        Tier::N1,
        Tier::N2,
        Tier::N3,
        Tier::N4,
        Tier::N5,
        Tier::N6,
        Tier::N7,
        Tier::N8,
        Tier::N9,
        Tier::N10,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::N0 => "N0",
            Tier::N1 => "N1",
            Tier::N2 => "N2",
            Tier::N3 => "N3",
            Tier::N4 => "N4",
            Tier::N5 => "N5",
            Tier::N6 => "N6",
            Tier::N7 => "N7",
            Tier::N8 => "N8",
            Tier::N9 => "N9",
            Tier::N10 => "N10",
        }
    }

    /// Numeric rank, 0 to 10.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tier {
    type Err = DomainError;

    /// Parse an exact tier label ("N0".."N10"). No normalization.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| DomainError::UnknownTier(s.to_string()))
    }
}

/// A job title ("cargo"). Closed set; unknown strings are rejected at the
/// boundary via [`JobTitle::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobTitle {
    Fundador,
    DiretorGeral,
    DiretorClinico,
    DiretorAdministrativo,
    SupervisorClinico,
    SupervisorAdministrativo,
    ChefeDeCirurgia,
    ChefeDePediatria,
    ChefeDeEnfermagem,
    ChefeDeLaboratorio,
    ChefeDeEnsino,
    ChefeDeRecepcao,
    ChefeDeFarmacia,
    Cirurgia,
    Pediatria,
    Enfermagem,
    Analista,
    Instrutor,
    Recepcao,
    Farmacia,
    Residente,
    Interno,
    Estagiario,
    Recruta,
}

impl JobTitle {
    pub const ALL: [JobTitle; 24] = [
        JobTitle::Fundador,
        JobTitle::DiretorGeral,
        JobTitle::DiretorClinico,
        JobTitle::DiretorAdministrativo,
        JobTitle::SupervisorClinico,
        JobTitle::SupervisorAdministrativo,
        JobTitle::ChefeDeCirurgia,
        JobTitle::ChefeDePediatria,
        JobTitle::ChefeDeEnfermagem,
        JobTitle::ChefeDeLaboratorio,
        JobTitle::ChefeDeEnsino,
        JobTitle::ChefeDeRecepcao,
        JobTitle::ChefeDeFarmacia,
        JobTitle::Cirurgia,
        JobTitle::Pediatria,
        JobTitle::Enfermagem,
        JobTitle::Analista,
        JobTitle::Instrutor,
        JobTitle::Recepcao,
        JobTitle::Farmacia,
        JobTitle::Residente,
        JobTitle::Interno,
        JobTitle::Estagiario,
        JobTitle::Recruta,
    ];

    /// The exact title string as stored in member documents.
    pub fn name(&self) -> &'static str {
        match self {
            JobTitle::Fundador => "Fundador",
            JobTitle::DiretorGeral => "Diretor Geral",
            JobTitle::DiretorClinico => "Diretor Clínico",
            JobTitle::DiretorAdministrativo => "Diretor Administrativo",
            JobTitle::SupervisorClinico => "Supervisor Clínico",
            JobTitle::SupervisorAdministrativo => "Supervisor Administrativo",
            JobTitle::ChefeDeCirurgia => "Chefe de Cirurgia",
            JobTitle::ChefeDePediatria => "Chefe de Pediatria",
            JobTitle::ChefeDeEnfermagem => "Chefe de Enfermagem",
            JobTitle::ChefeDeLaboratorio => "Chefe de Laboratório",
            JobTitle::ChefeDeEnsino => "Chefe de Ensino",
            JobTitle::ChefeDeRecepcao => "Chefe de Recepção",
            JobTitle::ChefeDeFarmacia => "Chefe de Farmácia",
            JobTitle::Cirurgia => "Cirurgia",
            JobTitle::Pediatria => "Pediatria",
            JobTitle::Enfermagem => "Enfermagem",
            JobTitle::Analista => "Analista",
            JobTitle::Instrutor => "Instrutor",
            JobTitle::Recepcao => "Recepção",
            JobTitle::Farmacia => "Farmácia",
            JobTitle::Residente => "Residente",
            JobTitle::Interno => "Interno",
            JobTitle::Estagiario => "Estagiário",
            JobTitle::Recruta => "Recruta",
        }
    }

    /// Resolve an exact title string. Case-sensitive, no trimming or fuzzy
    /// matching: `"fundador"` and `" Fundador"` are both unknown.
    pub fn from_name(name: &str) -> Option<JobTitle> {
        JobTitle::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// The tier this title belongs to. Titles occupy N1 to N10; N0 is
    /// reserved for visitors without a title.
    pub fn tier(&self) -> Tier {
        match self {
            JobTitle::Fundador => Tier::N10,
            JobTitle::DiretorGeral => Tier::N9,
            JobTitle::DiretorClinico | JobTitle::DiretorAdministrativo => Tier::N8,
            JobTitle::SupervisorClinico | JobTitle::SupervisorAdministrativo => Tier::N7,
            JobTitle::ChefeDeCirurgia
            | JobTitle::ChefeDePediatria
            | JobTitle::ChefeDeEnfermagem
            | JobTitle::ChefeDeLaboratorio
            | JobTitle::ChefeDeEnsino
            | JobTitle::ChefeDeRecepcao
            | JobTitle::ChefeDeFarmacia => Tier::N6,
            JobTitle::Cirurgia
            | JobTitle::Pediatria
            | JobTitle::Enfermagem
            | JobTitle::Analista
            | JobTitle::Instrutor
            | JobTitle::Recepcao
            | JobTitle::Farmacia => Tier::N5,
            JobTitle::Residente => Tier::N4,
            JobTitle::Interno => Tier::N3,
            JobTitle::Estagiario => Tier::N2,
            JobTitle::Recruta => Tier::N1,
        }
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
