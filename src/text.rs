//! Localized UI copy.

use serde::Deserialize;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish
    #[default]
    Es,
    /// English
    En,
}

/// Every user-visible string the widget renders.
#[derive(Debug)]
pub struct Strings {
    pub target: &'static str,
    pub dialog_title: &'static str,
    pub dialog_body: &'static str,
    pub decline: &'static str,
    pub accept: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub retry: &'static str,
    /// Commands bar descriptions.
    pub cmd_catch: &'static str,
    pub cmd_accept: &'static str,
    pub cmd_decline: &'static str,
    pub cmd_retry: &'static str,
    pub cmd_quit: &'static str,
}

static ES: Strings = Strings {
    target: "Haz click aquí",
    dialog_title: "¡Atención!",
    dialog_body: "¿Seguro que quieres apretar este botón?",
    decline: "No",
    accept: "Si",
    success_title: "¡Éxito!",
    success_body: "Felicidades por superar esta horrible experiencia de usuario.",
    retry: "Volver intentar",
    cmd_catch: "atrápalo",
    cmd_accept: "sí",
    cmd_decline: "no",
    cmd_retry: "otra vez",
    cmd_quit: "salir",
};

static EN: Strings = Strings {
    target: "Click here",
    dialog_title: "Attention!",
    dialog_body: "Are you sure you want to press this button?",
    decline: "No",
    accept: "Yes",
    success_title: "Success!",
    success_body: "Congratulations on surviving this horrible user experience.",
    retry: "Try again",
    cmd_catch: "catch it",
    cmd_accept: "yes",
    cmd_decline: "no",
    cmd_retry: "again",
    cmd_quit: "quit",
};

impl Locale {
    /// Returns the string table for this locale.
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }
}
