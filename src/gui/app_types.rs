//! Type definitions for FitBuddyApp

/// The three mutually exclusive views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Workout,
    Social,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Workout, Tab::Social];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Painel",
            Tab::Workout => "Registrar treino",
            Tab::Social => "Amigos",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Dashboard => "🏠",
            Tab::Workout => "➕",
            Tab::Social => "👥",
        }
    }
}
