//! Status badge classification.
//!
//! Maps free-form Portuguese status labels to a semantic style through an ordered
//! rule table. Matching is case-insensitive; status rules match substrings while
//! severity levels other than "crítica" must equal the whole label. The first
//! matching rule wins and no match yields [`BadgeStyle::Neutral`].

use std::fmt;

/// Semantic style of a badge. Front ends map these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeStyle {
    Positive,
    Warning,
    Negative,
    Info,
    Neutral,
}

impl BadgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Negative => "negative",
            Self::Info => "info",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a label should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeKind {
    #[default]
    Status,
    Severity,
    /// Status rules unless the caller supplies its own style.
    Custom(Option<BadgeStyle>),
}

enum Matcher {
    Contains(&'static [&'static str]),
    Equals(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, label: &str) -> bool {
        match self {
            Matcher::Contains(needles) => needles.iter().any(|n| label.contains(n)),
            Matcher::Equals(exact) => exact.iter().any(|e| label == *e),
        }
    }
}

struct Rule {
    matchers: &'static [Matcher],
    style: BadgeStyle,
}

const SEVERITY_RULES: &[Rule] = &[
    Rule {
        matchers: &[Matcher::Contains(&["crítica", "critica"]), Matcher::Equals(&["alta"])],
        style: BadgeStyle::Negative,
    },
    Rule {
        matchers: &[Matcher::Equals(&["média", "media", "médio", "medio"])],
        style: BadgeStyle::Warning,
    },
    Rule {
        matchers: &[Matcher::Equals(&["baixa", "baixo"])],
        style: BadgeStyle::Positive,
    },
];

const STATUS_RULES: &[Rule] = &[
    Rule {
        matchers: &[Matcher::Contains(&["ativo", "aberto", "andamento"])],
        style: BadgeStyle::Positive,
    },
    Rule {
        matchers: &[Matcher::Contains(&["pendente", "aguardando"])],
        style: BadgeStyle::Warning,
    },
    Rule {
        matchers: &[Matcher::Contains(&[
            "concluído",
            "concluido",
            "finalizado",
            "enviado",
        ])],
        style: BadgeStyle::Info,
    },
    Rule {
        matchers: &[Matcher::Contains(&["erro", "cancelado", "impedida"])],
        style: BadgeStyle::Negative,
    },
];

fn first_match(rules: &[Rule], label: &str) -> Option<BadgeStyle> {
    rules
        .iter()
        .find(|rule| rule.matchers.iter().any(|m| m.matches(label)))
        .map(|rule| rule.style)
}

/// Classify a label.
///
/// ```
/// use lap_client::badge::{BadgeKind, BadgeStyle, classify_status};
///
/// assert_eq!(classify_status("Em Andamento", BadgeKind::Status), BadgeStyle::Positive);
/// assert_eq!(classify_status("Alta", BadgeKind::Severity), BadgeStyle::Negative);
/// assert_eq!(classify_status("???", BadgeKind::Status), BadgeStyle::Neutral);
/// ```
pub fn classify_status(label: &str, kind: BadgeKind) -> BadgeStyle {
    let normalized = label.trim().to_lowercase();

    if let BadgeKind::Custom(Some(style)) = kind {
        return style;
    }

    if kind == BadgeKind::Severity
        && let Some(style) = first_match(SEVERITY_RULES, &normalized)
    {
        return style;
    }

    first_match(STATUS_RULES, &normalized).unwrap_or(BadgeStyle::Neutral)
}
