//! Seeded technology profiles.
//!
//! Hand-curated scores on the five standard dimensions. Exposed only through
//! the read-only `KnowledgeStore` queries.

use arbiter_core::types::{DimensionScore, Maturity, TechMetadata, TechProfile};

struct ProfileSpec {
    name: &'static str,
    category: &'static str,
    /// (dimension, score, explanation) for the five standard dimensions.
    dimensions: [(&'static str, f64, &'static str); 5],
    pros: &'static [&'static str],
    cons: &'static [&'static str],
    best_for: &'static [&'static str],
    maturity: Maturity,
    license: &'static str,
    maintainer: &'static str,
}

impl ProfileSpec {
    fn build(&self) -> TechProfile {
        TechProfile {
            name: self.name.to_string(),
            category: self.category.to_string(),
            dimensions: self
                .dimensions
                .iter()
                .map(|(dim, score, explanation)| {
                    (dim.to_string(), DimensionScore::new(*score, *explanation))
                })
                .collect(),
            pros: self.pros.iter().map(|s| s.to_string()).collect(),
            cons: self.cons.iter().map(|s| s.to_string()).collect(),
            best_for: self.best_for.iter().map(|s| s.to_string()).collect(),
            metadata: TechMetadata {
                maturity: self.maturity,
                license: self.license.to_string(),
                maintainer: self.maintainer.to_string(),
            },
        }
    }
}

/// Build all seeded profiles.
pub fn seed_profiles() -> Vec<TechProfile> {
    SPECS.iter().map(ProfileSpec::build).collect()
}

const SPECS: &[ProfileSpec] = &[
    ProfileSpec {
        name: "REST",
        category: "API",
        dimensions: [
            (
                "cost",
                4.5,
                "Low implementation cost, uses standard HTTP infrastructure",
            ),
            (
                "scalability",
                4.0,
                "Scales well with caching and CDNs, stateless nature helps",
            ),
            (
                "complexity",
                4.5,
                "Simple to understand and implement, follows HTTP conventions",
            ),
            (
                "ecosystem",
                5.0,
                "Mature ecosystem with extensive tooling and library support",
            ),
            (
                "performance",
                3.5,
                "Good performance but can be chatty with multiple round trips",
            ),
        ],
        pros: &[
            "Simple and intuitive HTTP-based design",
            "Excellent caching capabilities",
            "Wide tooling and client library support",
            "Stateless architecture enables easy scaling",
            "Human-readable URLs and responses",
        ],
        cons: &[
            "Can require multiple requests for complex data",
            "Over-fetching or under-fetching of data",
            "Limited real-time capabilities without additional protocols",
            "Versioning can become complex over time",
        ],
        best_for: &[
            "CRUD operations and resource-based APIs",
            "Public APIs with broad client compatibility",
            "Simple to moderate complexity applications",
            "Teams new to API development",
            "Applications requiring strong caching",
        ],
        maturity: Maturity::Mature,
        license: "Standard",
        maintainer: "W3C/IETF Standards",
    },
    ProfileSpec {
        name: "GraphQL",
        category: "API",
        dimensions: [
            (
                "cost",
                3.0,
                "Higher implementation complexity increases development costs",
            ),
            (
                "scalability",
                4.5,
                "Excellent query optimization and single endpoint scaling",
            ),
            (
                "complexity",
                2.5,
                "Steep learning curve, complex schema design and resolver logic",
            ),
            (
                "ecosystem",
                4.0,
                "Growing ecosystem with good tooling, but less mature than REST",
            ),
            (
                "performance",
                4.5,
                "Efficient data fetching, reduces over-fetching significantly",
            ),
        ],
        pros: &[
            "Single endpoint for all data needs",
            "Eliminates over-fetching and under-fetching",
            "Strong type system and introspection",
            "Excellent developer tooling and debugging",
            "Real-time subscriptions built-in",
        ],
        cons: &[
            "Complex caching strategies required",
            "Steep learning curve for teams",
            "Potential for expensive queries without proper limits",
            "Less suitable for simple CRUD operations",
        ],
        best_for: &[
            "Complex data relationships and queries",
            "Mobile applications with bandwidth constraints",
            "Rapid frontend development with changing requirements",
            "Applications requiring real-time features",
            "Teams with strong backend expertise",
        ],
        maturity: Maturity::Stable,
        license: "MIT",
        maintainer: "GraphQL Foundation",
    },
    ProfileSpec {
        name: "AWS Lambda",
        category: "Cloud Service",
        dimensions: [
            (
                "cost",
                4.0,
                "Pay-per-execution model, cost-effective for variable workloads",
            ),
            (
                "scalability",
                5.0,
                "Automatic scaling to handle any load, virtually unlimited",
            ),
            (
                "complexity",
                3.0,
                "Serverless paradigm requires different thinking, cold start considerations",
            ),
            (
                "ecosystem",
                4.5,
                "Rich AWS ecosystem integration, extensive third-party support",
            ),
            (
                "performance",
                3.5,
                "Good performance but cold starts can impact latency",
            ),
        ],
        pros: &[
            "No server management required",
            "Automatic scaling and high availability",
            "Pay only for actual execution time",
            "Seamless integration with AWS services",
            "Built-in monitoring and logging",
        ],
        cons: &[
            "Cold start latency for infrequent functions",
            "15-minute maximum execution time limit",
            "Vendor lock-in to AWS ecosystem",
            "Complex debugging and local development",
            "Limited control over runtime environment",
        ],
        best_for: &[
            "Event-driven architectures",
            "Microservices with variable load",
            "Data processing and ETL pipelines",
            "API backends with unpredictable traffic",
            "Startups wanting to minimize infrastructure overhead",
        ],
        maturity: Maturity::Mature,
        license: "Proprietary",
        maintainer: "Amazon Web Services",
    },
    ProfileSpec {
        name: "EC2",
        category: "Cloud Service",
        dimensions: [
            (
                "cost",
                3.0,
                "Predictable costs but requires capacity planning and optimization",
            ),
            (
                "scalability",
                4.0,
                "Good scaling with auto-scaling groups, but requires configuration",
            ),
            (
                "complexity",
                2.5,
                "Requires server management, security patching, and infrastructure knowledge",
            ),
            (
                "ecosystem",
                4.5,
                "Mature ecosystem with extensive AWS integration and tooling",
            ),
            (
                "performance",
                4.5,
                "Excellent performance with full control over compute resources",
            ),
        ],
        pros: &[
            "Full control over server environment",
            "Consistent performance without cold starts",
            "Wide variety of instance types and configurations",
            "Mature tooling and deployment options",
            "No execution time limits",
        ],
        cons: &[
            "Requires server management and maintenance",
            "Always-on costs even during idle periods",
            "Manual scaling configuration needed",
            "Security and patching responsibilities",
            "More complex deployment processes",
        ],
        best_for: &[
            "Long-running applications and services",
            "Applications requiring specific server configurations",
            "High-performance computing workloads",
            "Legacy applications with specific requirements",
            "Teams with strong DevOps capabilities",
        ],
        maturity: Maturity::Mature,
        license: "Proprietary",
        maintainer: "Amazon Web Services",
    },
    ProfileSpec {
        name: "React",
        category: "Frontend Framework",
        dimensions: [
            (
                "cost",
                4.5,
                "Free and open-source with large talent pool reducing costs",
            ),
            (
                "scalability",
                4.0,
                "Scales well for large applications with proper architecture",
            ),
            (
                "complexity",
                3.5,
                "Moderate learning curve, requires understanding of modern JS concepts",
            ),
            (
                "ecosystem",
                5.0,
                "Largest ecosystem with extensive libraries and community support",
            ),
            (
                "performance",
                4.0,
                "Good performance with virtual DOM, requires optimization for large apps",
            ),
        ],
        pros: &[
            "Huge community and ecosystem",
            "Excellent developer tools and debugging",
            "Component-based architecture promotes reusability",
            "Strong job market and talent availability",
            "Backed by Meta with long-term support",
        ],
        cons: &[
            "Rapid ecosystem changes can cause fatigue",
            "JSX syntax has a learning curve",
            "Requires additional libraries for full functionality",
            "Can become complex with state management needs",
        ],
        best_for: &[
            "Large-scale single-page applications",
            "Teams with strong JavaScript expertise",
            "Projects requiring extensive third-party integrations",
            "Applications with complex user interfaces",
            "Startups needing fast development and hiring",
        ],
        maturity: Maturity::Mature,
        license: "MIT",
        maintainer: "Meta (Facebook)",
    },
    ProfileSpec {
        name: "Vue",
        category: "Frontend Framework",
        dimensions: [
            (
                "cost",
                4.5,
                "Free and open-source with growing talent pool",
            ),
            (
                "scalability",
                4.0,
                "Scales well with good architecture, excellent for medium-large apps",
            ),
            (
                "complexity",
                4.5,
                "Gentle learning curve, intuitive template syntax",
            ),
            (
                "ecosystem",
                3.5,
                "Growing ecosystem but smaller than React, good official tooling",
            ),
            (
                "performance",
                4.5,
                "Excellent performance with efficient reactivity system",
            ),
        ],
        pros: &[
            "Gentle learning curve and intuitive syntax",
            "Excellent official documentation and tooling",
            "Progressive adoption possible in existing projects",
            "Great performance out of the box",
            "Strong TypeScript support",
        ],
        cons: &[
            "Smaller ecosystem compared to React",
            "Less job market demand",
            "Fewer large-scale enterprise examples",
            "Smaller community for complex problem solving",
        ],
        best_for: &[
            "Teams new to modern frontend frameworks",
            "Small to medium-sized applications",
            "Progressive enhancement of existing applications",
            "Rapid prototyping and development",
            "Projects prioritizing developer experience",
        ],
        maturity: Maturity::Stable,
        license: "MIT",
        maintainer: "Evan You / Vue Team",
    },
    ProfileSpec {
        name: "PostgreSQL",
        category: "Database",
        dimensions: [
            (
                "cost",
                5.0,
                "Free and open-source with no licensing costs",
            ),
            (
                "scalability",
                4.0,
                "Good vertical scaling, horizontal scaling requires additional setup",
            ),
            (
                "complexity",
                3.0,
                "Rich feature set requires learning, but well-documented",
            ),
            (
                "ecosystem",
                4.5,
                "Mature ecosystem with extensive extensions and tooling",
            ),
            (
                "performance",
                4.5,
                "Excellent performance for complex queries and ACID compliance",
            ),
        ],
        pros: &[
            "ACID compliance and strong consistency",
            "Rich data types including JSON, arrays, and custom types",
            "Powerful query capabilities and indexing",
            "Extensive extension ecosystem",
            "Strong community and enterprise support",
        ],
        cons: &[
            "Can be overkill for simple applications",
            "Requires more memory than simpler databases",
            "Horizontal scaling requires additional complexity",
            "Steeper learning curve for advanced features",
        ],
        best_for: &[
            "Applications requiring complex queries and transactions",
            "Data integrity critical applications",
            "Applications with varied data types",
            "Analytics and reporting workloads",
            "Teams with database expertise",
        ],
        maturity: Maturity::Mature,
        license: "PostgreSQL License",
        maintainer: "PostgreSQL Global Development Group",
    },
    ProfileSpec {
        name: "MongoDB",
        category: "Database",
        dimensions: [
            (
                "cost",
                3.5,
                "Free community version, but enterprise features require licensing",
            ),
            (
                "scalability",
                5.0,
                "Excellent horizontal scaling with built-in sharding",
            ),
            (
                "complexity",
                4.0,
                "Easy to get started, but requires understanding of NoSQL concepts",
            ),
            (
                "ecosystem",
                4.0,
                "Good ecosystem with strong driver support across languages",
            ),
            (
                "performance",
                4.0,
                "Good performance for read-heavy workloads and flexible schemas",
            ),
        ],
        pros: &[
            "Flexible schema design and rapid development",
            "Excellent horizontal scaling capabilities",
            "Native JSON document storage",
            "Strong aggregation pipeline for analytics",
            "Good performance for read-heavy applications",
        ],
        cons: &[
            "Eventual consistency can complicate some use cases",
            "Less mature tooling compared to relational databases",
            "Can lead to data duplication and inconsistency",
            "Memory usage can be higher than relational databases",
        ],
        best_for: &[
            "Rapid prototyping and agile development",
            "Applications with evolving data schemas",
            "Content management and catalog systems",
            "Real-time analytics and logging",
            "Microservices with independent data models",
        ],
        maturity: Maturity::Mature,
        license: "SSPL",
        maintainer: "MongoDB Inc.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_seed_profiles_are_complete() {
        for profile in seed_profiles() {
            assert!(
                profile.is_complete(),
                "{} has issues: {:?}",
                profile.name,
                profile.completeness_issues()
            );
        }
    }

    #[test]
    fn test_seed_profile_names_are_unique() {
        let profiles = seed_profiles();
        let mut names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), profiles.len());
    }
}
