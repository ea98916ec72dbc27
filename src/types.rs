use serde_json::{Map, Value};

// ─── Ticket ─────────────────────────────────────────────────────────────────

/// A raw operation-ticket record: an ordered mapping from field name to a
/// dynamically-typed value.
///
/// No schema is enforced. Upstream pagination sources name and type fields
/// inconsistently, so every access is optional and goes through the alias
/// tables below.
pub type Ticket = Map<String, Value>;

// ─── Canonical time roles ───────────────────────────────────────────────────

/// The five ordered checkpoints a ticket's lifecycle must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeRole {
    Receive,
    Fill,
    Start,
    End,
    Report,
}

impl TimeRole {
    /// Canonical lifecycle order checked by the time-logic rule.
    pub const SEQUENCE: [TimeRole; 5] = [
        TimeRole::Receive,
        TimeRole::Fill,
        TimeRole::Start,
        TimeRole::End,
        TimeRole::Report,
    ];

    /// Alias field names for this role, in resolution order.
    /// The first alias whose value normalizes to a timestamp wins.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            TimeRole::Receive => &["receiveOrderTime", "takeOrderTime"],
            TimeRole::Fill => &["fillTicketTime", "generateDate", "createTime"],
            TimeRole::Start => &["operationStartTime"],
            TimeRole::End => &["operationEndTime"],
            TimeRole::Report => &["reportTime"],
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            TimeRole::Receive => "receive-order time",
            TimeRole::Fill => "fill-ticket time",
            TimeRole::Start => "operation start time",
            TimeRole::End => "operation end time",
            TimeRole::Report => "report time",
        }
    }
}

// ─── Personnel roles ────────────────────────────────────────────────────────

/// Personnel roles examined by the cross-ticket conflict scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PersonnelRole {
    Operator,
    Guardian,
    Watch,
}

impl PersonnelRole {
    pub const ALL: [PersonnelRole; 3] = [
        PersonnelRole::Operator,
        PersonnelRole::Guardian,
        PersonnelRole::Watch,
    ];

    /// The ticket field holding this role's name(s).
    pub fn field(self) -> &'static str {
        match self {
            PersonnelRole::Operator => "operatorUnames",
            PersonnelRole::Guardian => "guardianUnames",
            PersonnelRole::Watch => "watchUname",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            PersonnelRole::Operator => "operator",
            PersonnelRole::Guardian => "guardian",
            PersonnelRole::Watch => "on-duty supervisor",
        }
    }
}
