//! Template service and recurring-transaction processor
//!
//! Alongside plain CRUD, this service materializes transactions from
//! templates. Applying a template is a two-step write: create the
//! transaction, then advance the template's `next_date`. There is no
//! rollback; if the second write fails the created transaction stays and the
//! template is stale (at-least-once semantics).

use chrono::{Days, Months, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::config::OpKind;
use crate::error::{DashError, DashResult};
use crate::models::{
    Frequency, NewTemplate, NewTransaction, Template, TemplateId, TemplatePatch, Transaction,
};
use crate::services::TransactionService;
use crate::store::Store;

/// Service for recurring transaction templates
pub struct TemplateService<'a> {
    store: &'a Store,
}

impl<'a> TemplateService<'a> {
    /// Create a new template service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List every template, ascending by id
    pub async fn get_all(&self) -> Vec<Template> {
        self.store.settings().pause(OpKind::GetAll).await;

        let templates = self.store.templates.read().await;
        let mut copies = templates.clone();
        copies.sort_by_key(|t| t.id);
        copies
    }

    /// Get a template by id
    pub async fn get(&self, id: TemplateId) -> DashResult<Template> {
        self.store.settings().pause(OpKind::Get).await;

        let templates = self.store.templates.read().await;
        templates
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DashError::template_not_found(id.raw()))
    }

    /// Create a new template
    ///
    /// `is_active` defaults to true when the draft leaves it unset.
    pub async fn create(&self, input: NewTemplate) -> DashResult<Template> {
        self.store.settings().pause(OpKind::Create).await;

        let description = input.description.trim();
        if description.is_empty() {
            return Err(DashError::Validation(
                "Template description cannot be empty".into(),
            ));
        }
        if !input.amount.is_positive() {
            return Err(DashError::Validation(
                "Template amount must be positive".into(),
            ));
        }

        let mut templates = self.store.templates.write().await;
        let new_id = self.store.next_template_id(&templates);

        let template = Template {
            id: TemplateId::from_raw(new_id),
            description: description.to_string(),
            amount: input.amount,
            kind: input.kind,
            category: input.category,
            frequency: input.frequency,
            start_date: input.start_date,
            next_date: input.next_date,
            is_active: input.is_active.unwrap_or(true),
            created_at: Utc::now(),
            updated_at: None,
        };

        templates.push(template.clone());
        debug!(id = %template.id, frequency = %template.frequency, "created template");
        Ok(template)
    }

    /// Merge a patch onto an existing template, stamping `updated_at`
    pub async fn update(&self, id: TemplateId, patch: TemplatePatch) -> DashResult<Template> {
        self.store.settings().pause(OpKind::Update).await;

        let mut templates = self.store.templates.write().await;
        let template = templates
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DashError::template_not_found(id.raw()))?;

        patch.apply(template);
        template.updated_at = Some(Utc::now());
        debug!(id = %template.id, "updated template");
        Ok(template.clone())
    }

    /// Remove a template
    pub async fn delete(&self, id: TemplateId) -> DashResult<()> {
        self.store.settings().pause(OpKind::Delete).await;

        let mut templates = self.store.templates.write().await;
        let index = templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DashError::template_not_found(id.raw()))?;

        templates.remove(index);
        debug!(%id, "deleted template");
        Ok(())
    }

    /// List the templates the processor would apply
    pub async fn get_active_templates(&self) -> Vec<Template> {
        self.store.settings().pause(OpKind::Filter).await;

        let templates = self.store.templates.read().await;
        templates.iter().filter(|t| t.is_active).cloned().collect()
    }

    /// Compute the occurrence after the template's current one
    ///
    /// Advances `next_date` (or `start_date` while no occurrence has been
    /// applied yet) by one frequency unit. Monthly and yearly steps clamp to
    /// the last day of the target month: 2024-01-31 plus one month is
    /// 2024-02-29, and 2024-02-29 plus one year is 2025-02-28.
    pub fn calculate_next_date(template: &Template) -> DashResult<NaiveDate> {
        let base = template.next_date.unwrap_or(template.start_date);
        let next = match template.frequency {
            Frequency::Daily => base.checked_add_days(Days::new(1)),
            Frequency::Weekly => base.checked_add_days(Days::new(7)),
            Frequency::Monthly => base.checked_add_months(Months::new(1)),
            Frequency::Yearly => base.checked_add_months(Months::new(12)),
        };
        next.ok_or_else(|| {
            DashError::Validation(format!("Next occurrence after {base} is out of range"))
        })
    }

    /// Parse a frequency from untyped input
    pub fn parse_frequency(value: &str) -> DashResult<Frequency> {
        value
            .parse()
            .map_err(|other: String| DashError::UnsupportedFrequency(other))
    }

    /// Materialize a transaction from the template and advance `next_date`
    ///
    /// The generated transaction is dated at the template's current
    /// occurrence and carries a `template_id` back-reference.
    pub async fn process_template(&self, template: &Template) -> DashResult<Transaction> {
        self.store.settings().pause(OpKind::Process).await;

        let occurrence = template.next_date.unwrap_or(template.start_date);
        let draft = NewTransaction {
            description: template.description.clone(),
            amount: template.amount,
            kind: template.kind,
            category: template.category.clone(),
            date: occurrence.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
            template_id: Some(template.id),
        };

        let created = TransactionService::new(self.store).create(draft).await?;

        let next_date = Self::calculate_next_date(template)?;
        let advance = TemplatePatch {
            next_date: Some(next_date),
            ..Default::default()
        };
        if let Err(err) = self.update(template.id, advance).await {
            // No rollback: the transaction above stays and the template keeps
            // its old next_date.
            warn!(
                template = %template.id,
                transaction = %created.id,
                "template advance failed after transaction was created: {err}"
            );
            return Err(err);
        }

        debug!(template = %template.id, transaction = %created.id, %next_date, "applied template");
        Ok(created)
    }
}
