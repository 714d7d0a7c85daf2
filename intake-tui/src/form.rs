//! The account form container.
//!
//! Owns the widgets, the focus ring, and the submission state. Every
//! change snapshots the widgets into an [`InvestmentDetails`] record and
//! re-runs validation over the whole record, so cross-field rules stay
//! current no matter which field changed.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use formwork::prelude::*;
use log::{debug, info};
use tokio::sync::mpsc::UnboundedSender;

use crate::account::{self, InvestmentDetails, RiskLevel, field};
use crate::gateway;

/// Messages delivered back to the event loop from async work.
#[derive(Debug)]
pub enum AppMessage {
    /// The in-flight submission finished.
    SubmissionFinished,
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Focusable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    FullName,
    InitialInvestment,
    InvestmentRisk,
    Comment,
    Dependents,
    Terms,
}

impl FocusField {
    const RING: [FocusField; 6] = [
        FocusField::FullName,
        FocusField::InitialInvestment,
        FocusField::InvestmentRisk,
        FocusField::Comment,
        FocusField::Dependents,
        FocusField::Terms,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    fn prev(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

/// The one form this application is about.
pub struct AccountForm {
    pub full_name: Input,
    pub initial_investment: Input,
    pub investment_risk: CheckGroup,
    pub comment: Input,
    pub dependents: Select,
    pub terms: Checkbox,
    pub submission: Submission,
    focus: FocusField,
    dirty: bool,
    tx: UnboundedSender<AppMessage>,
}

impl AccountForm {
    pub fn new(tx: UnboundedSender<AppMessage>) -> Self {
        let initial_investment = Input::with_value("0");
        let investment_risk =
            CheckGroup::with_options(RiskLevel::ALL.map(RiskLevel::label).to_vec());
        let dependents = Select::with_placeholder("Select ...");
        dependents.set_options(vec!["0", "1", "2", "3", "4", "5"]);

        Self {
            full_name: Input::with_placeholder("Your full name"),
            initial_investment,
            investment_risk,
            comment: Input::with_placeholder("Why this risk suits you"),
            dependents,
            terms: Checkbox::with_label("Accept terms and conditions"),
            submission: Submission::new(),
            focus: FocusField::FullName,
            dirty: true,
            tx,
        }
    }

    /// The currently focused field.
    pub fn focus(&self) -> FocusField {
        self.focus
    }

    /// Request a re-render.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Take the aggregated dirty flag for render scheduling.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty
            || self.full_name.is_dirty()
            || self.initial_investment.is_dirty()
            || self.investment_risk.is_dirty()
            || self.comment.is_dirty()
            || self.dependents.is_dirty()
            || self.terms.is_dirty()
            || self.submission.is_dirty();

        if dirty {
            self.dirty = false;
            self.full_name.clear_dirty();
            self.initial_investment.clear_dirty();
            self.investment_risk.clear_dirty();
            self.comment.clear_dirty();
            self.dependents.clear_dirty();
            self.terms.clear_dirty();
            self.submission.clear_dirty();
        }
        dirty
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Resize(_, _) => {
                self.mark_dirty();
                Outcome::Continue
            }
            _ => Outcome::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Outcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Outcome::Quit,
                KeyCode::Char('s') => {
                    self.submit();
                    Outcome::Continue
                }
                KeyCode::Char('r') => {
                    self.reset();
                    Outcome::Continue
                }
                _ => Outcome::Continue,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                self.mark_dirty();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                self.mark_dirty();
            }
            _ => {
                if self.dispatch_to_focused(key) {
                    self.revalidate();
                } else if key.code == KeyCode::Esc {
                    // Nothing (like an open dropdown) wanted the Esc.
                    return Outcome::Quit;
                }
            }
        }
        Outcome::Continue
    }

    fn dispatch_to_focused(&self, key: &KeyEvent) -> bool {
        match self.focus {
            FocusField::FullName => self.full_name.handle_key(key),
            FocusField::InitialInvestment => self.initial_investment.handle_key(key),
            FocusField::InvestmentRisk => self.investment_risk.handle_key(key),
            FocusField::Comment => self.comment.handle_key(key),
            FocusField::Dependents => self.dependents.handle_key(key),
            FocusField::Terms => self.terms.handle_key(key),
        }
    }

    /// Snapshot the widget values into a record.
    pub fn snapshot(&self) -> InvestmentDetails {
        let amount_text = self.initial_investment.value();
        let amount_text = amount_text.trim();
        let initial_investment = if amount_text.is_empty() {
            None
        } else {
            amount_text.parse::<f64>().ok().filter(|v| v.is_finite())
        };

        let investment_risk = self
            .investment_risk
            .selected_indices()
            .into_iter()
            .filter_map(|index| RiskLevel::ALL.get(index).copied())
            .collect();

        let dependents = match self.dependents.selection() {
            Some(index) => index as i32,
            None => -1,
        };

        InvestmentDetails {
            full_name: self.full_name.value(),
            initial_investment,
            investment_risk,
            comment_about_investment_risk: self.comment.value(),
            dependents,
            accepted_terms_and_conditions: self.terms.is_checked(),
        }
    }

    /// Re-run validation over the whole record and push the report onto
    /// the widgets.
    pub fn revalidate(&self) -> ValidationReport {
        let report = account::validate(&self.snapshot());
        self.apply_report(&report);
        report
    }

    fn apply_report(&self, report: &ValidationReport) {
        apply_error(&self.full_name, report.error_for(field::FULL_NAME));
        apply_error(
            &self.initial_investment,
            report.error_for(field::INITIAL_INVESTMENT),
        );
        apply_error(&self.investment_risk, report.error_for(field::INVESTMENT_RISK));
        apply_error(&self.comment, report.error_for(field::COMMENT));
        apply_error(&self.dependents, report.error_for(field::DEPENDENTS));
        apply_error(&self.terms, report.error_for(field::TERMS));
    }

    /// Validate and, if the record is clean, hand it to the gateway.
    pub fn submit(&mut self) {
        if self.submission.is_pending() {
            debug!("submit ignored: submission in flight");
            return;
        }

        let report = self.revalidate();
        self.mark_dirty();
        if report.is_invalid() {
            debug!(
                "submit blocked by {} invalid field(s)",
                report.errors().len()
            );
            return;
        }

        if !self.submission.begin() {
            return;
        }

        let record = self.snapshot();
        debug_assert!(record.is_submit_eligible());
        info!("submitting account application");
        let tx = self.tx.clone();
        tokio::spawn(async move {
            gateway::submit_application(record).await;
            let _ = tx.send(AppMessage::SubmissionFinished);
        });
    }

    /// Handle a message from async work.
    pub fn on_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SubmissionFinished => {
                if self.submission.is_pending() {
                    self.submission.complete();
                    // The submitted record is done with; start fresh.
                    self.reset_fields();
                }
                self.mark_dirty();
            }
        }
    }

    /// Reset the whole form, including the submission state.
    pub fn reset(&mut self) {
        self.reset_fields();
        self.submission.reset();
        self.mark_dirty();
    }

    fn reset_fields(&mut self) {
        self.full_name.clear();
        self.initial_investment.set_value("0");
        self.investment_risk.clear_selection();
        self.comment.clear();
        self.dependents.clear_selection();
        self.terms.set_checked(false);
        self.clear_errors();
        self.focus = FocusField::FullName;
    }

    fn clear_errors(&self) {
        self.full_name.clear_error();
        self.initial_investment.clear_error();
        self.investment_risk.clear_error();
        self.comment.clear_error();
        self.dependents.clear_error();
        self.terms.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use tokio::sync::mpsc;

    use super::*;

    fn form() -> AccountForm {
        let (tx, _rx) = mpsc::unbounded_channel();
        AccountForm::new(tx)
    }

    #[test]
    fn test_snapshot_of_fresh_form_is_default_record() {
        assert_eq!(form().snapshot(), InvestmentDetails::default());
    }

    #[test]
    fn test_snapshot_maps_widgets_to_record() {
        let form = form();
        form.full_name.set_value("Jane Doe");
        form.initial_investment.set_value("500");
        form.investment_risk.toggle(2); // Low
        form.dependents.select(2);
        form.terms.set_checked(true);

        let record = form.snapshot();
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.initial_investment, Some(500.0));
        assert_eq!(record.investment_risk, BTreeSet::from([RiskLevel::Low]));
        assert_eq!(record.dependents, 2);
        assert!(record.accepted_terms_and_conditions);
        assert!(record.is_submit_eligible());
    }

    #[test]
    fn test_unparsable_amount_snapshots_as_unset() {
        let form = form();
        form.initial_investment.set_value("a lot");
        assert_eq!(form.snapshot().initial_investment, None);

        form.initial_investment.set_value("  ");
        assert_eq!(form.snapshot().initial_investment, None);

        form.initial_investment.set_value("NaN");
        assert_eq!(form.snapshot().initial_investment, None);
    }

    #[test]
    fn test_revalidate_writes_errors_onto_widgets() {
        let form = form();
        let report = form.revalidate();
        assert!(report.is_invalid());

        assert!(form.full_name.has_error());
        assert!(form.initial_investment.has_error());
        assert!(form.investment_risk.has_error());
        assert!(!form.comment.has_error());
        assert!(form.dependents.has_error());
        assert!(form.terms.has_error());
    }

    #[test]
    fn test_toggling_high_risk_flips_comment_error() {
        let form = form();

        form.investment_risk.toggle(0); // High
        form.revalidate();
        assert!(form.comment.has_error());

        form.investment_risk.toggle(0); // back off
        form.revalidate();
        assert!(!form.comment.has_error());
    }

    #[test]
    fn test_focus_ring_cycles() {
        let mut form = form();
        assert_eq!(form.focus(), FocusField::FullName);

        for _ in 0..FocusField::RING.len() {
            form.focus = form.focus.next();
        }
        assert_eq!(form.focus(), FocusField::FullName);

        form.focus = form.focus.prev();
        assert_eq!(form.focus(), FocusField::Terms);
    }

    #[test]
    fn test_invalid_submit_does_not_start_submission() {
        let mut form = form();
        form.submit();
        assert!(form.submission.is_idle());
    }

    #[tokio::test]
    async fn test_valid_submit_sets_busy_and_refuses_reentry() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut form = AccountForm::new(tx);
        form.full_name.set_value("Jane Doe");
        form.initial_investment.set_value("500");
        form.investment_risk.toggle(2);
        form.dependents.select(2);
        form.terms.set_checked(true);

        form.submit();
        assert!(form.submission.is_pending());

        // Second submit while busy is refused.
        form.submit();
        assert!(form.submission.is_pending());

        // Completion clears the busy flag and discards the record.
        form.on_message(AppMessage::SubmissionFinished);
        assert!(form.submission.is_done());
        assert_eq!(form.snapshot(), InvestmentDetails::default());
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_errors() {
        let mut form = form();
        form.full_name.set_value("J");
        form.investment_risk.toggle(0);
        form.revalidate();
        assert!(form.full_name.has_error());

        form.reset();
        assert_eq!(form.snapshot(), InvestmentDetails::default());
        assert!(!form.full_name.has_error());
        assert!(!form.terms.has_error());
        assert!(form.submission.is_idle());
    }
}
