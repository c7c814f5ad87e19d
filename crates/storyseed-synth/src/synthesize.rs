use jiff::Span;
use rand::Rng;
use rand::seq::IndexedRandom;
use tera::Context;

use storyseed_core::keys;
use storyseed_core::models::record::ContentRecord;
use storyseed_core::slug::slugify;

use crate::catalogue::{Catalogue, DomainSeed, Seed, SeedGroup};
use crate::error::SynthError;
use crate::render::{TemplateKind, Templates, template_name};

/// Turns a validated catalogue into content records.
///
/// Templates are compiled once in [`Synthesizer::new`]; each call to
/// [`Synthesizer::synthesize`] draws fresh values from the supplied RNG.
pub struct Synthesizer {
    catalogue: Catalogue,
    templates: Templates,
}

impl Synthesizer {
    pub fn new(catalogue: Catalogue) -> Result<Self, SynthError> {
        catalogue.validate()?;

        let mut templates = Templates::new();
        for (domain, group) in catalogue.groups() {
            let name = |kind| template_name(&domain.key, &group.label, kind);
            templates.add(&name(TemplateKind::Url), &group.url)?;
            templates.add(&name(TemplateKind::Summary), &group.summary)?;
            if let Some(body) = &group.body {
                templates.add(&name(TemplateKind::Body), body)?;
            }
        }

        Ok(Self {
            catalogue,
            templates,
        })
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Produce one record per seed, domain by domain and group by group in
    /// catalogue order.
    ///
    /// Per record the RNG is consumed in a fixed order: date offset, then
    /// each named choice set in key order, then sentiment.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<ContentRecord>, SynthError> {
        let mut records = Vec::with_capacity(self.catalogue.seed_count());
        for (domain, group) in self.catalogue.groups() {
            for (position, seed) in group.seeds.iter().enumerate() {
                let record = self.synthesize_record(domain, group, position + 1, seed, rng)?;
                tracing::debug!(id = %record.id, date = %record.date_published, "synthesized record");
                records.push(record);
            }
        }

        tracing::info!(
            records = records.len(),
            domains = self.catalogue.domains.len(),
            "synthesis complete"
        );
        Ok(records)
    }

    fn synthesize_record<R: Rng + ?Sized>(
        &self,
        domain: &DomainSeed,
        group: &SeedGroup,
        index: usize,
        seed: &Seed,
        rng: &mut R,
    ) -> Result<ContentRecord, SynthError> {
        let offset = rng.random_range(group.offset_days.min..=group.offset_days.max);
        let span = Span::new().try_days(i64::from(offset))?;
        let date_published = domain.base_date.checked_sub(span)?;

        let mut context = Context::new();
        context.insert("title", &seed.title);
        context.insert("description", &seed.description);
        context.insert("domain", &domain.key);
        context.insert("index", &index);
        context.insert("brand_or_person", &domain.brand_or_person);
        for (name, values) in &group.choices {
            let value = values
                .choose(rng)
                .ok_or_else(|| empty_set(domain, group, name))?;
            context.insert(name.as_str(), value);
        }

        let sentiment = *group
            .sentiments
            .choose(rng)
            .ok_or_else(|| empty_set(domain, group, "sentiments"))?;

        let name = |kind| template_name(&domain.key, &group.label, kind);
        let full_text_content = match &seed.content {
            Some(content) => content.clone(),
            None => self.templates.render(&name(TemplateKind::Body), &context)?,
        };

        Ok(ContentRecord {
            id: keys::record_id(&domain.key, &group.label, index),
            title: seed.title.clone(),
            slug: slugify(&seed.title),
            content_type: group.content_type,
            description: seed.description.clone(),
            full_text_content,
            image_url: keys::image_url(&domain.key, &group.label, index),
            url: self.templates.render(&name(TemplateKind::Url), &context)?,
            tags: seed.tags.iter().chain(&group.tags).cloned().collect(),
            categories: seed.categories.iter().chain(&group.categories).cloned().collect(),
            related_entities: group.related_entities.clone(),
            brand_or_person: domain.brand_or_person.clone(),
            date_published,
            author: group.author.clone(),
            sentiment,
            ai_summary: self.templates.render(&name(TemplateKind::Summary), &context)?,
        })
    }
}

fn empty_set(domain: &DomainSeed, group: &SeedGroup, set: &str) -> SynthError {
    SynthError::EmptyChoiceSet {
        domain: domain.key.clone(),
        label: group.label.clone(),
        set: set.to_string(),
    }
}
