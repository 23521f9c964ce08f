//! Seeded generator for sample corpora.
//!
//! Uses `Xoshiro256PlusPlus` so a given seed yields the same corpus on every
//! platform and every run.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::core::query::SortKey;
use crate::domain::{Category, Difficulty, PublishedDate, Resource, ResourceId, ResourceKind};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

/// Corpus size used when none is configured
pub const DEFAULT_CORPUS_SIZE: usize = 2500;

/// Share of generated records flagged as featured
const FEATURED_RATE: f64 = 0.15;

/// Publish dates fall within this many days before the anchor
const PUBLISH_WINDOW_DAYS: i64 = 365 * 2;

const AUTHORS: &[&str] = &[
    "Dr. Sarah Chen, RD",
    "Dr. Michael Torres, PhD",
    "Dr. Lisa Martinez, PT",
    "Dr. Rachel Kim, MD",
    "Dr. James Wilson, LMFT",
    "Dr. Emma Thompson, ND",
    "Dr. Robert Singh, MD",
    "Dr. Amanda Foster, PhD",
    "Dr. David Park, MD",
    "Dr. Maria Rodriguez, RD",
    "Dr. Jennifer Lee, PhD",
    "Dr. Thomas Brown, PT",
    "Dr. Lisa Wang, MD",
    "Dr. Carlos Mendez, LCSW",
    "Dr. Elena Popov, ND",
    "Dr. Mark Johnson, PhD",
];

const TOPICS: &[&str] = &[
    "chronic pain",
    "arthritis",
    "fibromyalgia",
    "depression",
    "anxiety",
    "insomnia",
    "ADHD",
    "diabetes",
    "heart disease",
    "obesity",
    "hypertension",
    "IBS",
    "Crohn's disease",
    "lupus",
    "multiple sclerosis",
    "rheumatoid arthritis",
    "thyroid disorders",
    "migraines",
    "chronic fatigue",
    "PCOS",
    "endometriosis",
    "osteoporosis",
];

const DESCRIPTIONS: &[&str] = &[
    "Comprehensive evidence-based approach to understanding and managing {topic} through proven clinical strategies and lifestyle interventions.",
    "Latest research findings and practical applications for healthcare professionals treating {topic} in clinical settings.",
    "Step-by-step protocol for implementing therapeutic interventions targeting {topic} with measurable outcomes.",
    "Evidence-based recommendations for lifestyle modifications supporting {topic} management and prevention.",
    "Scientific review of current treatment modalities and emerging therapies for {topic}.",
    "Practical guide combining traditional wisdom with modern scientific understanding of {topic}.",
    "Clinical assessment tools and monitoring strategies for optimizing {topic} treatment protocols.",
    "Integrative approach to {topic} incorporating multiple therapeutic modalities and patient-centered care.",
];

fn title_templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::MentalHealth => &[
            "Advanced Stress Management Techniques for {topic}",
            "Understanding Anxiety: A Comprehensive Guide to {topic}",
            "Mindfulness-Based Approaches to {topic}",
            "Cognitive Behavioral Strategies for {topic}",
            "The Science of Sleep and {topic}",
            "Building Resilience: {topic} in Daily Life",
            "Meditation Practices for {topic} Relief",
            "Neuroplasticity and {topic} Recovery",
        ],
        Category::Nutrition => &[
            "Anti-Inflammatory Diet Protocol for {topic}",
            "Micronutrient Optimization in {topic} Management",
            "Plant-Based Nutrition for {topic}",
            "The Gut-Brain Connection: {topic} and Digestive Health",
            "Therapeutic Nutrition for {topic}",
            "Evidence-Based Supplementation for {topic}",
            "Metabolic Approaches to {topic}",
            "Functional Foods in {topic} Treatment",
        ],
        Category::Fitness => &[
            "Exercise Therapy for {topic} Management",
            "Movement Patterns in {topic} Rehabilitation",
            "Strength Training Protocols for {topic}",
            "Cardiovascular Health and {topic}",
            "Flexibility and Mobility for {topic}",
            "High-Intensity Training Adaptations in {topic}",
            "Recovery Strategies for {topic}",
            "Biomechanics of {topic} Prevention",
        ],
        Category::Autoimmune => &[
            "Autoimmune Protocol Diet for {topic}",
            "Immune System Modulation in {topic}",
            "Environmental Triggers of {topic}",
            "Microbiome and {topic} Connection",
            "Stress-Induced {topic} Flares",
            "Functional Medicine Approach to {topic}",
            "Lifestyle Interventions for {topic}",
            "Biomarker Monitoring in {topic}",
        ],
        Category::Holistic => &[
            "Integrative Medicine Approaches to {topic}",
            "Traditional Healing Methods for {topic}",
            "Energy Medicine and {topic}",
            "Herbal Therapies in {topic} Management",
            "Mind-Body Techniques for {topic}",
            "Acupuncture and {topic} Relief",
            "Ayurvedic Principles for {topic}",
            "Spiritual Wellness in {topic} Healing",
        ],
        Category::Inflammation => &[
            "Chronic Inflammation Pathways in {topic}",
            "Natural Anti-Inflammatory Compounds for {topic}",
            "Inflammatory Biomarkers in {topic}",
            "Diet-Induced Inflammation and {topic}",
            "Exercise as Anti-Inflammatory Therapy for {topic}",
            "Stress-Related Inflammation in {topic}",
            "Omega-3 Fatty Acids in {topic} Management",
            "Polyphenols and {topic} Prevention",
        ],
    }
}

fn category_tags(category: Category) -> &'static [&'static str] {
    match category {
        Category::MentalHealth => &[
            "stress", "anxiety", "depression", "mindfulness", "meditation", "sleep", "resilience", "therapy",
        ],
        Category::Nutrition => &[
            "diet", "supplements", "gut-health", "anti-inflammatory", "micronutrients", "metabolism", "weight-loss",
            "digestion",
        ],
        Category::Fitness => &[
            "exercise", "strength", "cardio", "flexibility", "rehabilitation", "movement", "recovery", "biomechanics",
        ],
        Category::Autoimmune => &[
            "immune-system", "inflammation", "autoimmune-protocol", "microbiome", "triggers", "biomarkers", "flares",
        ],
        Category::Holistic => &[
            "integrative", "herbal", "energy-medicine", "acupuncture", "ayurveda", "traditional-healing",
            "spiritual-wellness",
        ],
        Category::Inflammation => &[
            "chronic-inflammation", "anti-inflammatory", "biomarkers", "omega-3", "polyphenols", "inflammatory-foods",
        ],
    }
}

fn read_times(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Article => &["3 min read", "5 min read", "8 min read", "12 min read", "15 min read"],
        ResourceKind::Guide => &["15 min read", "20 min read", "30 min read", "45 min read", "60 min read"],
        ResourceKind::Video => &["10 min watch", "15 min watch", "25 min watch", "35 min watch", "45 min watch"],
        ResourceKind::Audio => &["20 min listen", "30 min listen", "45 min listen", "60 min listen"],
        ResourceKind::Tool | ResourceKind::Download => &[],
    }
}

fn base_downloads(kind: ResourceKind) -> u64 {
    match kind {
        ResourceKind::Tool => 800,
        ResourceKind::Guide => 1200,
        _ => 400,
    }
}

/// Default anchor for publish dates
fn default_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Deterministic sample-data generator
#[derive(Debug, Clone)]
pub struct ResourceGenerator {
    rng: Xoshiro256PlusPlus,
    anchor: NaiveDate,
}

impl ResourceGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            anchor: default_anchor(),
        }
    }

    /// Latest possible publish date
    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = anchor;
        self
    }

    /// Generate `count` resources ordered by relevance
    pub fn generate(mut self, count: usize) -> Vec<Resource> {
        let mut resources: Vec<Resource> = (1..=count).map(|n| self.next_resource(n)).collect();
        resources.sort_by(|a, b| SortKey::Relevance.compare(a, b));
        resources
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    fn next_resource(&mut self, n: usize) -> Resource {
        let category = self.pick(&Category::ALL);
        let kind = self.pick(&ResourceKind::ALL);
        let difficulty = self.pick(&Difficulty::ALL);
        let author = self.pick(AUTHORS);
        let topic = self.pick(TOPICS);

        let title = self.pick(title_templates(category)).replace("{topic}", topic);
        let description = self.pick(DESCRIPTIONS).replace("{topic}", topic);

        let tag_pool = category_tags(category);
        let tag_count = self.rng.gen_range(2..=6usize).min(tag_pool.len());
        let tags: Vec<String> = tag_pool
            .choose_multiple(&mut self.rng, tag_count)
            .map(|t| t.to_string())
            .collect();

        let times = read_times(kind);
        let read_time = if times.is_empty() {
            None
        } else {
            Some(self.pick(times).to_string())
        };

        let downloads = self.rng.gen_range(0..2000u64) + base_downloads(kind);
        let citations = self.rng.gen_range(10..160u64);
        let age = Duration::days(self.rng.gen_range(0..PUBLISH_WINDOW_DAYS));
        let published = PublishedDate::from(self.anchor.checked_sub_signed(age).unwrap_or(NaiveDate::MIN));
        let featured = self.rng.gen_bool(FEATURED_RATE);

        Resource {
            id: ResourceId::sequential(n),
            title,
            description,
            author: author.to_string(),
            category,
            kind,
            difficulty,
            read_time,
            tags,
            downloads,
            citations,
            published,
            featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_corpus() {
        let a = ResourceGenerator::new(7).generate(200);
        let b = ResourceGenerator::new(7).generate(200);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_corpus() {
        let a = ResourceGenerator::new(1).generate(50);
        let b = ResourceGenerator::new(2).generate(50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_records_follow_distributions() {
        let anchor = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let resources = ResourceGenerator::new(42).with_anchor(anchor).generate(500);

        assert_eq!(resources.len(), 500);
        for r in &resources {
            assert!(r.downloads >= base_downloads(r.kind));
            assert!(r.downloads < base_downloads(r.kind) + 2000);
            assert!((10..160).contains(&r.citations));
            assert!((2..=6).contains(&r.tags.len()));
            assert!(!r.title.contains("{topic}"));

            let date = r.published.parsed().expect("generated dates parse");
            assert!(date <= anchor);
            assert!(date > anchor - Duration::days(PUBLISH_WINDOW_DAYS));

            match r.kind {
                ResourceKind::Tool | ResourceKind::Download => assert!(r.read_time.is_none()),
                _ => assert!(r.read_time.is_some()),
            }
        }
    }

    #[test]
    fn test_anchor_near_min_date_clamps() {
        let anchor = NaiveDate::MIN + Duration::days(10);
        let resources = ResourceGenerator::new(4).with_anchor(anchor).generate(200);

        for r in &resources {
            let date = r.published.parsed().expect("generated dates parse");
            assert!(date >= NaiveDate::MIN && date <= anchor);
        }
    }

    #[test]
    fn test_generated_output_is_relevance_ordered() {
        let resources = ResourceGenerator::new(3).generate(300);
        for pair in resources.windows(2) {
            assert_ne!(
                SortKey::Relevance.compare(&pair[0], &pair[1]),
                std::cmp::Ordering::Greater
            );
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let resources = ResourceGenerator::new(9).generate(100);
        let ids: std::collections::HashSet<_> = resources.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 100);
    }
}
