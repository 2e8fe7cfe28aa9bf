//! Order status lifecycle and its transition table.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Order status lifecycle.
///
/// Serialized under the literal variant names (`Pending`, `Paid`, ...);
/// persisted representations must round-trip these exactly.
///
/// `Refunded` is part of the vocabulary and of the terminal set, but no
/// command currently transitions into it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Terminal statuses admit no further commands.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Refunded
        )
    }

    /// The transition table: which status a command moves this one to.
    ///
    /// This is the single place the state machine lives; command methods look
    /// up their transition here instead of re-checking statuses inline. Any
    /// pair not listed is an [`DomainError::InvalidStateTransition`].
    pub fn next(self, command: OrderCommandKind) -> Result<OrderStatus, DomainError> {
        use OrderCommandKind::*;
        use OrderStatus::*;

        match (self, command) {
            (Pending, Pay) => Ok(Paid),
            (Pending | Paid, Cancel) => Ok(Cancelled),
            (Paid, Ship) => Ok(Shipped),
            (Shipped, MarkDelivered) => Ok(Delivered),
            (Delivered, Complete) => Ok(Completed),
            _ => Err(DomainError::InvalidStateTransition {
                current: self,
                command,
            }),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        };
        f.write_str(name)
    }
}

/// The commands the aggregate accepts, for transition lookup and diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrderCommandKind {
    Pay,
    Cancel,
    Ship,
    MarkDelivered,
    Complete,
}

impl fmt::Display for OrderCommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            OrderCommandKind::Pay => "pay",
            OrderCommandKind::Cancel => "cancel",
            OrderCommandKind::Ship => "ship",
            OrderCommandKind::MarkDelivered => "mark delivered",
            OrderCommandKind::Complete => "complete",
        };
        f.write_str(verb)
    }
}

#[cfg(test)]
mod tests {
    use super::OrderCommandKind::*;
    use super::OrderStatus::*;
    use super::*;

    const STATUSES: [OrderStatus; 7] = [
        Pending, Paid, Shipped, Delivered, Completed, Cancelled, Refunded,
    ];
    const COMMANDS: [OrderCommandKind; 5] = [Pay, Cancel, Ship, MarkDelivered, Complete];

    const ALLOWED: [(OrderStatus, OrderCommandKind, OrderStatus); 6] = [
        (Pending, Pay, Paid),
        (Pending, Cancel, Cancelled),
        (Paid, Cancel, Cancelled),
        (Paid, Ship, Shipped),
        (Shipped, MarkDelivered, Delivered),
        (Delivered, Complete, Completed),
    ];

    #[test]
    fn allowed_transitions_reach_the_expected_status() {
        for (from, command, to) in ALLOWED {
            assert_eq!(from.next(command).unwrap(), to, "{from} --{command}-->");
        }
    }

    #[test]
    fn every_unlisted_pair_is_rejected() {
        for from in STATUSES {
            for command in COMMANDS {
                if ALLOWED.iter().any(|(f, c, _)| *f == from && *c == command) {
                    continue;
                }
                let err = from.next(command).unwrap_err();
                assert_eq!(
                    err,
                    DomainError::InvalidStateTransition {
                        current: from,
                        command,
                    }
                );
            }
        }
    }

    #[test]
    fn terminal_statuses() {
        for status in STATUSES {
            let expected = matches!(status, Completed | Cancelled | Refunded);
            assert_eq!(status.is_terminal(), expected, "{status}");
        }
    }

    #[test]
    fn status_serializes_to_literal_variant_names() {
        for (status, name) in [
            (Pending, "\"Pending\""),
            (Refunded, "\"Refunded\""),
            (Cancelled, "\"Cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), name);
            assert_eq!(
                serde_json::from_str::<OrderStatus>(name).unwrap(),
                status
            );
        }
    }
}
