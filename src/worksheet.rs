//! Interactive risk worksheet: the row list and weight owned by one session.
//!
//! Every edit goes through a method here, and every method finishes by running the sentinel
//! pass exactly once. Statistics are never cached; [`RiskWorksheet::assessment`] recomputes
//! them from the current rows.

use tracing::{debug, warn};

use crate::core::{DEFAULT_WEIGHT, RiskRow, RowEntry, RowId, WorksheetError, parse_numeric_entry};
use crate::report::RiskAssessment;
use crate::risk::{MitigationPolicy, redistribute_sentinel_probability_with_policy};

/// Editable row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Situation,
    Loss,
    Probability,
}

/// New value for one field of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowUpdate {
    Situation(String),
    Loss(f64),
    Probability(f64),
}

impl RowUpdate {
    /// Builds an update from raw text as typed into `field`.
    ///
    /// Numeric fields go through [`parse_numeric_entry`], so invalid text becomes `0`.
    pub fn from_entry(field: RowField, raw: &str) -> Self {
        match field {
            RowField::Situation => Self::Situation(raw.to_string()),
            RowField::Loss => Self::Loss(parse_numeric_entry(raw)),
            RowField::Probability => Self::Probability(parse_numeric_entry(raw)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiskWorksheet {
    rows: Vec<RiskRow>,
    weight: f64,
    policy: MitigationPolicy,
}

impl Default for RiskWorksheet {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskWorksheet {
    /// One empty row, default weight, built-in policy.
    pub fn new() -> Self {
        Self::with_policy(MitigationPolicy::default())
    }

    pub fn with_policy(policy: MitigationPolicy) -> Self {
        Self {
            rows: vec![RiskRow::new()],
            weight: DEFAULT_WEIGHT,
            policy,
        }
    }

    /// Builds a worksheet holding exactly `entries`, or one empty row when there are none.
    pub fn from_entries(
        entries: impl IntoIterator<Item = RowEntry>,
        weight: f64,
        policy: MitigationPolicy,
    ) -> Self {
        let mut rows: Vec<RiskRow> = entries
            .into_iter()
            .map(|e| RiskRow::with_values(e.situation, e.loss, e.probability))
            .collect();
        if rows.is_empty() {
            rows.push(RiskRow::new());
        }

        let mut sheet = Self {
            rows,
            weight: DEFAULT_WEIGHT,
            policy,
        };
        sheet.set_weight(weight);
        sheet
    }

    pub fn rows(&self) -> &[RiskRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&RiskRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn policy(&self) -> &MitigationPolicy {
        &self.policy
    }

    /// Appends an empty row and returns its id.
    pub fn add_row(&mut self) -> RowId {
        let row = RiskRow::new();
        let id = row.id;
        self.rows.push(row);
        debug!(row = %id, rows = self.rows.len(), "row added");
        self.refresh();
        id
    }

    pub fn remove_row(&mut self, id: RowId) -> Result<RiskRow, WorksheetError> {
        let index = self.index_of(id)?;
        if self.rows.len() == 1 {
            return Err(WorksheetError::LastRow);
        }

        let removed = self.rows.remove(index);
        debug!(row = %id, rows = self.rows.len(), "row removed");
        self.refresh();
        Ok(removed)
    }

    pub fn update_row(&mut self, id: RowId, update: RowUpdate) -> Result<(), WorksheetError> {
        let index = self.index_of(id)?;
        let row = &mut self.rows[index];
        match update {
            RowUpdate::Situation(situation) => row.situation = situation,
            RowUpdate::Loss(loss) => row.loss = loss,
            RowUpdate::Probability(probability) => row.probability = probability,
        }
        debug!(row = %id, "row updated");
        self.refresh();
        Ok(())
    }

    /// Accepts any weight; values outside `[0, 1]` are logged but kept.
    pub fn set_weight(&mut self, weight: f64) {
        if !(0.0..=1.0).contains(&weight) {
            warn!(weight, "weight outside [0, 1]");
        }
        self.weight = weight;
        self.refresh();
    }

    /// Baseline and mitigated statistics for the current rows and weight.
    pub fn assessment(&self) -> RiskAssessment {
        RiskAssessment::evaluate(&self.rows, self.weight, &self.policy)
    }

    fn index_of(&self, id: RowId) -> Result<usize, WorksheetError> {
        self.rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(WorksheetError::UnknownRow(id))
    }

    // Single sentinel pass; the rule is idempotent so no re-run is needed.
    fn refresh(&mut self) {
        redistribute_sentinel_probability_with_policy(&mut self.rows, &self.policy);
    }
}
