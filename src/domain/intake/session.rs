//! FormSession aggregate - the root entity for one candidate's intake.
//!
//! The session owns every step's state and the aggregate record, and is the
//! only way to change them. Steps unlock strictly in order: exactly one step
//! is active until the last one completes, a completed step never reopens,
//! and only the active step accepts edits.

use tracing::{debug, info};

use crate::domain::country::{CountrySelection, DialCodeEntry};
use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, StepStatus, Timestamp,
};
use crate::domain::validation::{check_all, FieldError, FieldRule, FieldValue};

use super::{
    ConditionalRuleEngine, Field, IntakeSchema, StepDefinition, StepErrors, StepOutcome,
    StepState, UserRecord,
};

/// The FormSession aggregate root.
#[derive(Debug, Clone)]
pub struct FormSession {
    id: SessionId,
    schema: IntakeSchema,
    conditions: ConditionalRuleEngine,
    steps: Vec<StepState>,
    record: UserRecord,
    country: CountrySelection,
    started_at: Timestamp,
}

impl FormSession {
    /// Creates a session over the standard five-step intake.
    pub fn new() -> Self {
        Self::with_schema(IntakeSchema::standard(), ConditionalRuleEngine::standard())
    }

    /// Creates a session over a custom schema.
    pub fn with_schema(schema: IntakeSchema, conditions: ConditionalRuleEngine) -> Self {
        let steps = initial_steps(&schema);
        Self {
            id: SessionId::new(),
            schema,
            conditions,
            steps,
            record: UserRecord::new(),
            country: CountrySelection::default(),
            started_at: Timestamp::now(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns when the session was created.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns the schema this session validates against.
    pub fn schema(&self) -> &IntakeSchema {
        &self.schema
    }

    /// Returns the state of every step, in order.
    pub fn steps(&self) -> &[StepState] {
        &self.steps
    }

    /// Returns the state of one step.
    pub fn step(&self, number: u8) -> Option<&StepState> {
        self.steps.iter().find(|s| s.number() == number)
    }

    /// Number of the active step; `None` once every step is completed.
    pub fn active_step(&self) -> Option<u8> {
        self.steps.iter().find(|s| s.is_active()).map(StepState::number)
    }

    /// Returns true when the last step has been completed.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(StepState::is_completed)
    }

    /// The aggregate of all completed steps so far.
    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    /// The phone prefix picker.
    pub fn country(&self) -> &CountrySelection {
        &self.country
    }

    // ───────────────────────────────────────────────────────────────
    // Field edits
    // ───────────────────────────────────────────────────────────────

    /// Sets one field of the active step without validating the step.
    ///
    /// Changing a trigger field re-derives its dependents' requiredness.
    pub fn patch_field(
        &mut self,
        step: u8,
        field: Field,
        value: impl Into<FieldValue>,
    ) -> Result<(), DomainError> {
        let idx = self.editable_step(step)?;
        self.ensure_field(idx, field)?;
        self.write_field(idx, field, value.into());
        Ok(())
    }

    /// Marks a field of the active step as touched so its errors show.
    pub fn touch_field(&mut self, step: u8, field: Field) -> Result<(), DomainError> {
        let idx = self.editable_step(step)?;
        self.ensure_field(idx, field)?;
        self.steps[idx].touch(field);
        Ok(())
    }

    /// Copies values from an earlier record into every step.
    ///
    /// Used when resuming; statuses are untouched, so restored steps still
    /// have to be submitted.
    pub fn prefill(&mut self, record: &UserRecord) {
        for idx in 0..self.steps.len() {
            let definition = &self.schema.steps()[idx];
            let restored: Vec<(Field, FieldValue)> = definition
                .fields()
                .iter()
                .filter_map(|spec| record.get(spec.field).map(|v| (spec.field, v.clone())))
                .collect();
            for (field, value) in restored {
                self.write_field(idx, field, value);
            }
        }
        if let Some(code) = record.get(Field::PhoneCountryCode) {
            self.country.select_dial_code(&code.as_text());
        }
        debug!(session_id = %self.id, fields = record.len(), "Prefilled intake from saved record");
    }

    // ───────────────────────────────────────────────────────────────
    // Validation queries
    // ───────────────────────────────────────────────────────────────

    /// Returns true if the field currently must be filled in.
    pub fn is_required(&self, step: u8, field: Field) -> Result<bool, DomainError> {
        let idx = self.step_index(step)?;
        self.ensure_field(idx, field)?;
        Ok(self.effective_rules(idx, field).iter().any(FieldRule::is_required))
    }

    /// All current failures of a field, touched or not.
    pub fn validate_field(&self, step: u8, field: Field) -> Result<Vec<FieldError>, DomainError> {
        let idx = self.step_index(step)?;
        self.ensure_field(idx, field)?;
        Ok(self.field_errors(idx, field))
    }

    /// Failures to display: only touched fields show errors.
    pub fn visible_errors(&self, step: u8, field: Field) -> Result<Vec<FieldError>, DomainError> {
        let idx = self.step_index(step)?;
        self.ensure_field(idx, field)?;
        if self.steps[idx].is_touched(field) {
            Ok(self.field_errors(idx, field))
        } else {
            Ok(Vec::new())
        }
    }

    /// Validates every field of a step against its current values.
    pub fn validate_step(&self, step: u8) -> Result<StepErrors, DomainError> {
        let idx = self.step_index(step)?;
        Ok(self.step_errors(idx))
    }

    /// Sum of the four energy percentages, for display only.
    ///
    /// Unset or non-numeric aspects count as zero. The sum is deliberately
    /// not a validation rule.
    pub fn energy_sum(&self) -> f64 {
        let Some(state) = self
            .schema
            .step_of(Field::EnergyAspect1)
            .and_then(|def| self.step(def.number()))
        else {
            return 0.0;
        };
        Field::ENERGY_ASPECTS
            .iter()
            .map(|f| state.value(*f).as_number().unwrap_or(0.0))
            .sum()
    }

    // ───────────────────────────────────────────────────────────────
    // Step transitions
    // ───────────────────────────────────────────────────────────────

    /// Applies `values` to the active step, then validates and commits it.
    ///
    /// On success the step is completed, the next one activated and the
    /// step's values merged into the record. On failure every field of the
    /// step is marked touched and the failures are returned; completion and
    /// the record are left as they were. Addressing a step that is not
    /// active, or a field outside the step, is an error and changes nothing.
    pub fn submit_step<I, V>(&mut self, step: u8, values: I) -> Result<StepOutcome, DomainError>
    where
        I: IntoIterator<Item = (Field, V)>,
        V: Into<FieldValue>,
    {
        match self.validate_submission(step, values)? {
            StepOutcome::Validated { .. } => self.commit_step(step),
            outcome => Ok(outcome),
        }
    }

    /// Applies `values` to the active step and validates it, without
    /// completing it.
    ///
    /// A passing step yields [`StepOutcome::Validated`] carrying the record
    /// as it would be after [`FormSession::commit_step`]; the step stays
    /// active and editable. A failing step is rejected as in
    /// [`FormSession::submit_step`].
    pub fn validate_submission<I, V>(
        &mut self,
        step: u8,
        values: I,
    ) -> Result<StepOutcome, DomainError>
    where
        I: IntoIterator<Item = (Field, V)>,
        V: Into<FieldValue>,
    {
        let idx = self.editable_step(step)?;
        let values: Vec<(Field, FieldValue)> =
            values.into_iter().map(|(f, v)| (f, v.into())).collect();
        for (field, _) in &values {
            self.ensure_field(idx, *field)?;
        }
        for (field, value) in values {
            self.write_field(idx, field, value);
        }

        let errors = self.step_errors(idx);
        if !errors.is_empty() {
            return Ok(self.reject(idx, errors));
        }

        let mut record = self.record.clone();
        record.merge(self.steps[idx].values());
        Ok(StepOutcome::Validated { step, record })
    }

    /// Completes the active step with its current values.
    ///
    /// The step is validated again first; if it no longer passes it is
    /// rejected and stays active.
    pub fn commit_step(&mut self, step: u8) -> Result<StepOutcome, DomainError> {
        let idx = self.editable_step(step)?;
        let errors = self.step_errors(idx);
        if !errors.is_empty() {
            return Ok(self.reject(idx, errors));
        }

        self.steps[idx].complete()?;
        self.record.merge(self.steps[idx].values());

        let next_step = match self.steps.get_mut(idx + 1) {
            Some(next) => {
                next.activate()?;
                Some(next.number())
            }
            None => None,
        };

        info!(session_id = %self.id, step, ?next_step, "Step completed");

        Ok(StepOutcome::Advanced {
            step,
            next_step,
            record: self.record.clone(),
        })
    }

    /// The finished record; only available once every step is completed.
    pub fn final_record(&self) -> Result<UserRecord, DomainError> {
        if !self.is_complete() {
            let pending = self.active_step().map(|s| s.to_string()).unwrap_or_default();
            return Err(DomainError::new(
                ErrorCode::IntakeIncomplete,
                "Cannot finalize an intake with incomplete steps",
            )
            .with_detail("active_step", pending));
        }
        Ok(self.record.clone())
    }

    /// Returns every step to its initial state and clears the record.
    ///
    /// The loaded dial codes survive, and the currently selected prefix is
    /// written back into the first step.
    pub fn reset_all(&mut self) {
        self.steps = initial_steps(&self.schema);
        self.record.clear();
        self.country.close();
        self.sync_phone_country_code();
        info!(session_id = %self.id, "Intake reset");
    }

    // ───────────────────────────────────────────────────────────────
    // Phone prefix picker
    // ───────────────────────────────────────────────────────────────

    /// Loads the dial code list and preselects `default_dial_code`.
    pub fn load_dial_codes(&mut self, entries: Vec<DialCodeEntry>, default_dial_code: &str) {
        self.country = CountrySelection::new(entries, default_dial_code);
        self.sync_phone_country_code();
    }

    /// Picks a country by ISO code and writes its prefix into the first step.
    pub fn select_country(&mut self, iso_code: &str) -> Result<DialCodeEntry, DomainError> {
        let entry = self
            .country
            .select_entry(iso_code)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::UnknownCountry,
                    format!("No dial code entry for country '{}'", iso_code),
                )
                .with_detail("iso_code", iso_code)
            })?;
        self.sync_phone_country_code();
        Ok(entry)
    }

    /// Opens or closes the picker.
    pub fn toggle_country_dropdown(&mut self) {
        self.country.toggle_open();
    }

    /// Closes the picker.
    pub fn close_country_dropdown(&mut self) {
        self.country.close();
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn step_index(&self, step: u8) -> Result<usize, DomainError> {
        self.schema
            .index_of(step)
            .ok_or_else(|| DomainError::step_not_found(step))
    }

    fn editable_step(&self, step: u8) -> Result<usize, DomainError> {
        let idx = self.step_index(step)?;
        if self.steps[idx].is_active() {
            Ok(idx)
        } else {
            Err(DomainError::step_locked(step)
                .with_detail("status", self.steps[idx].status().to_string()))
        }
    }

    fn ensure_field(&self, idx: usize, field: Field) -> Result<(), DomainError> {
        let definition = &self.schema.steps()[idx];
        if definition.contains(field) {
            Ok(())
        } else {
            Err(DomainError::unknown_field(definition.number(), field.as_str()))
        }
    }

    fn write_field(&mut self, idx: usize, field: Field, value: FieldValue) {
        let state = &mut self.steps[idx];
        state.set_value(field, value);
        self.conditions.apply(field, state);
    }

    fn reject(&mut self, idx: usize, errors: StepErrors) -> StepOutcome {
        let step = self.steps[idx].number();
        let fields: Vec<Field> = self.definition(idx).fields().iter().map(|s| s.field).collect();
        self.steps[idx].touch_all(fields);
        debug!(
            session_id = %self.id,
            step,
            failing_fields = errors.len(),
            "Step submission rejected"
        );
        StepOutcome::Rejected { step, errors }
    }

    fn definition(&self, idx: usize) -> &StepDefinition {
        &self.schema.steps()[idx]
    }

    fn effective_rules(&self, idx: usize, field: Field) -> Vec<FieldRule> {
        let mut rules = self
            .definition(idx)
            .spec(field)
            .map(|s| s.rules.clone())
            .unwrap_or_default();
        if self.steps[idx].is_conditionally_required(field) && !rules.iter().any(FieldRule::is_required)
        {
            rules.insert(0, FieldRule::Required);
        }
        rules
    }

    fn field_errors(&self, idx: usize, field: Field) -> Vec<FieldError> {
        check_all(&self.effective_rules(idx, field), self.steps[idx].value(field))
    }

    fn step_errors(&self, idx: usize) -> StepErrors {
        let mut errors = StepErrors::default();
        for spec in self.definition(idx).fields() {
            errors.insert(spec.field, self.field_errors(idx, spec.field));
        }
        errors
    }

    fn sync_phone_country_code(&mut self) {
        let Some(dial_code) = self.country.selected().map(|e| e.dial_code.clone()) else {
            return;
        };
        let Some(idx) = self
            .schema
            .step_of(Field::PhoneCountryCode)
            .and_then(|def| self.schema.index_of(def.number()))
        else {
            return;
        };
        if self.steps[idx].is_active() {
            self.write_field(idx, Field::PhoneCountryCode, FieldValue::Text(dial_code));
        } else {
            debug!(session_id = %self.id, "Dial code changed after its step was locked");
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

fn initial_steps(schema: &IntakeSchema) -> Vec<StepState> {
    schema
        .steps()
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let status = if i == 0 {
                StepStatus::Active
            } else {
                StepStatus::Pending
            };
            StepState::new(def, status)
        })
        .collect()
}
