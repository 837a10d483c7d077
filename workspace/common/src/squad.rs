//! Squad debt totals, the split draft and the deadbeat leaderboard.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::parse_amount;
use crate::{DebtDirection, SplitRequest, SquadMember};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];
const TITLES: [&str; 3] = ["👑 King of Debt", "💸 Big Spender", "🐢 Slow Payer"];

/// Totals across every member, in euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquadBalances {
    pub owed_to_you: Decimal,
    pub you_owe: Decimal,
}

impl SquadBalances {
    pub fn compute(members: &[SquadMember]) -> Self {
        let sum_for = |direction: DebtDirection| -> Decimal {
            members
                .iter()
                .filter(|m| m.direction == direction)
                .map(|m| m.amount)
                .sum()
        };
        Self {
            owed_to_you: sum_for(DebtDirection::OwesYou),
            you_owe: sum_for(DebtDirection::YouOwe),
        }
    }

    pub fn net(&self) -> Decimal {
        self.owed_to_you - self.you_owe
    }
}

/// Each person's share when `others` members split with you, to the cent.
pub fn per_person_share(total: Decimal, others: usize) -> Decimal {
    let people = Decimal::from(others as u64 + 1);
    (total / people).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Form state of the split modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitDraft {
    pub description: String,
    pub amount_input: String,
    pub selected: Vec<String>,
}

impl SplitDraft {
    pub fn toggle_member(&mut self, member_id: &str) {
        if let Some(position) = self.selected.iter().position(|id| id == member_id) {
            self.selected.remove(position);
        } else {
            self.selected.push(member_id.to_string());
        }
    }

    pub fn is_selected(&self, member_id: &str) -> bool {
        self.selected.iter().any(|id| id == member_id)
    }

    pub fn amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount_input)
    }

    pub fn can_submit(&self) -> bool {
        self.amount().is_some() && !self.selected.is_empty()
    }

    /// Headcount including you.
    pub fn people(&self) -> usize {
        self.selected.len() + 1
    }

    /// Locally computed share shown as a preview and used when the server omits it.
    pub fn preview_share(&self) -> Option<Decimal> {
        self.amount().map(|amount| per_person_share(amount, self.selected.len()))
    }

    pub fn to_request(&self) -> Option<SplitRequest> {
        if !self.can_submit() {
            return None;
        }
        let description = match self.description.trim() {
            "" => "Split expense".to_string(),
            text => text.to_string(),
        };
        Some(SplitRequest {
            description,
            total_amount: self.amount()?,
            member_ids: self.selected.clone(),
            paid_by: None,
        })
    }

    /// Confirmation toast after a successful split.
    pub fn confirmation(&self, server_share: Option<Decimal>) -> String {
        let amount = self.amount().unwrap_or_default();
        let share = server_share
            .or_else(|| self.preview_share())
            .unwrap_or_default();
        format!("€{} split {} ways — €{:.2} each", amount, self.people(), share)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry<'a> {
    pub member: &'a SquadMember,
    pub medal: &'static str,
    pub title: &'static str,
}

/// Members who owe you, biggest debt first.
pub fn leaderboard(members: &[SquadMember]) -> Vec<LeaderboardEntry<'_>> {
    let mut debtors: Vec<&SquadMember> = members
        .iter()
        .filter(|m| m.direction == DebtDirection::OwesYou)
        .collect();
    debtors.sort_by(|a, b| b.amount.cmp(&a.amount));

    debtors
        .into_iter()
        .enumerate()
        .map(|(rank, member)| LeaderboardEntry {
            member,
            medal: MEDALS.get(rank).copied().unwrap_or("•"),
            title: TITLES.get(rank).copied().unwrap_or(""),
        })
        .collect()
}

/// Plain-text leaderboard for sharing; the caller URL-encodes it.
pub fn share_message(members: &[SquadMember]) -> String {
    let balances = SquadBalances::compute(members);
    let debtors: Vec<String> = members
        .iter()
        .filter(|m| m.direction == DebtDirection::OwesYou)
        .map(|m| format!("• {}: €{:.2}", m.name, m.amount))
        .collect();
    format!(
        "Stash Deadbeat Leaderboard\n\nTotal owed: €{:.2}\n{}\n\nPay up!",
        balances.owed_to_you,
        debtors.join("\n")
    )
}

pub const WHATSAPP_SHARE_BASE: &str = "https://wa.me/?text=";

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, cents: i64, direction: DebtDirection) -> SquadMember {
        SquadMember {
            id: id.to_string(),
            name: name.to_string(),
            initials: name[..2].to_uppercase(),
            amount: Decimal::new(cents, 2),
            direction,
            reason: "Pizza night".to_string(),
            days_since: 3,
        }
    }

    fn squad() -> Vec<SquadMember> {
        vec![
            member("m1", "Aoife Byrne", 1240, DebtDirection::OwesYou),
            member("m2", "Raj Patel", 800, DebtDirection::YouOwe),
            member("m3", "Liam Doyle", 2500, DebtDirection::OwesYou),
            member("m4", "Mei Chen", 0, DebtDirection::Settled),
        ]
    }

    #[test]
    fn test_balances() {
        let balances = SquadBalances::compute(&squad());
        assert_eq!(balances.owed_to_you, Decimal::new(3740, 2));
        assert_eq!(balances.you_owe, Decimal::new(800, 2));
        assert_eq!(balances.net(), Decimal::new(2940, 2));
    }

    #[test]
    fn test_leaderboard_sorted_with_medals() {
        let members = squad();
        let board = leaderboard(&members);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].member.name, "Liam Doyle");
        assert_eq!(board[0].medal, "🥇");
        assert_eq!(board[0].title, "👑 King of Debt");
        assert_eq!(board[1].member.name, "Aoife Byrne");
        assert_eq!(board[1].medal, "🥈");
    }

    #[test]
    fn test_per_person_share_includes_you() {
        assert_eq!(per_person_share(Decimal::new(30, 0), 2), Decimal::new(10, 0));
        assert_eq!(per_person_share(Decimal::new(10, 0), 2), Decimal::new(333, 2));
    }

    #[test]
    fn test_split_draft_requires_amount_and_members() {
        let mut draft = SplitDraft::default();
        draft.amount_input = "30".to_string();
        assert!(!draft.can_submit());
        assert!(draft.to_request().is_none());

        draft.toggle_member("m1");
        draft.toggle_member("m3");
        assert!(draft.can_submit());

        let request = draft.to_request().unwrap();
        assert_eq!(request.description, "Split expense");
        assert_eq!(request.member_ids, vec!["m1".to_string(), "m3".to_string()]);
        assert_eq!(request.total_amount, Decimal::new(30, 0));
    }

    #[test]
    fn test_split_draft_toggle_removes() {
        let mut draft = SplitDraft::default();
        draft.toggle_member("m1");
        draft.toggle_member("m1");
        assert!(draft.selected.is_empty());
        assert!(!draft.is_selected("m1"));
    }

    #[test]
    fn test_confirmation_prefers_server_share() {
        let mut draft = SplitDraft::default();
        draft.amount_input = "30".to_string();
        draft.toggle_member("m1");
        draft.toggle_member("m3");

        assert_eq!(
            draft.confirmation(Some(Decimal::new(1000, 2))),
            "€30 split 3 ways — €10.00 each"
        );
        assert_eq!(draft.confirmation(None), "€30 split 3 ways — €10.00 each");
    }

    #[test]
    fn test_share_message_lists_debtors() {
        let message = share_message(&squad());
        assert!(message.starts_with("Stash Deadbeat Leaderboard"));
        assert!(message.contains("Total owed: €37.40"));
        assert!(message.contains("• Aoife Byrne: €12.40"));
        assert!(!message.contains("Raj"));
        assert!(message.ends_with("Pay up!"));
    }
}
