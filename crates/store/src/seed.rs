//! Demo dataset for EcoSprout Packaging.
//!
//! Four products, three blog posts and four team members. Collection order is
//! display order.

use chrono::NaiveDate;

use ecosprout_content::{Author, BlogPost, SocialLinks, TeamMember};
use ecosprout_core::{DomainError, DomainResult, MemberId, PostId, ProductId, Slug};
use ecosprout_products::{
    Category, DimensionUnit, Dimensions, Price, Product, Sustainability,
};

const PRODUCTS_HERO: &str = "/src/assets/products-hero.jpg";
const TEAM_HERO: &str = "/src/assets/team-hero.jpg";
const HOME_HERO: &str = "/src/assets/hero-bg.jpg";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::invariant(format!("invalid seed date {year}-{month}-{day}")))
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "EcoBox Premium".to_string(),
            description: "Our flagship biodegradable shipping box made from 100% recycled cardboard with water-based inks. Perfect for e-commerce businesses looking to reduce their environmental impact while maintaining professional presentation.".to_string(),
            short_description: "Premium biodegradable shipping box with elegant design".to_string(),
            price: Price::from_cents(299),
            images: strings(&[PRODUCTS_HERO]),
            category: Category::Boxes,
            features: strings(&[
                "100% recycled cardboard",
                "Water-based inks only",
                "Easy assembly design",
                "Custom branding available",
                "Tear-resistant construction",
            ]),
            sustainability: Sustainability {
                biodegradable: true,
                recyclable: true,
                compostable: true,
                certifications: strings(&["FSC Certified", "SFI Certified", "Cradle to Cradle"]),
            },
            dimensions: Some(Dimensions {
                length: 30.0,
                width: 20.0,
                height: 15.0,
                unit: DimensionUnit::Cm,
            }),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Compostable Food Containers".to_string(),
            description: "Revolutionary plant-based food containers that break down completely in home compost systems within 90 days. Made from renewable sugarcane fibers and corn starch.".to_string(),
            short_description: "Plant-based containers for sustainable food service".to_string(),
            price: Price::from_cents(125),
            images: strings(&[PRODUCTS_HERO]),
            category: Category::Containers,
            features: strings(&[
                "Home compostable in 90 days",
                "Microwave and freezer safe",
                "Leak-proof design",
                "Made from sugarcane fiber",
                "Non-toxic materials",
            ]),
            sustainability: Sustainability {
                biodegradable: true,
                recyclable: false,
                compostable: true,
                certifications: strings(&["BPI Certified", "OK Compost HOME", "ASTM D6400"]),
            },
            dimensions: None,
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Recycled Paper Bags".to_string(),
            description: "Stylish and durable paper bags crafted from post-consumer recycled paper. Available in various sizes with reinforced handles for heavy-duty use.".to_string(),
            short_description: "Durable recycled paper bags with reinforced handles".to_string(),
            price: Price::from_cents(85),
            images: strings(&[PRODUCTS_HERO]),
            category: Category::Bags,
            features: strings(&[
                "Post-consumer recycled paper",
                "Reinforced twisted handles",
                "Water-resistant coating",
                "Multiple size options",
                "Custom printing available",
            ]),
            sustainability: Sustainability {
                biodegradable: true,
                recyclable: true,
                compostable: true,
                certifications: strings(&["FSC Certified", "Recycled Content Verified"]),
            },
            dimensions: None,
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("4"),
            name: "Beeswax Food Wraps".to_string(),
            description: "Natural alternative to plastic wrap made with organic cotton infused with sustainably sourced beeswax, tree resin, and jojoba oil. Fully compostable at the end of its life.".to_string(),
            short_description: "Natural beeswax wraps replace plastic food storage".to_string(),
            price: Price::from_cents(1599),
            images: strings(&[PRODUCTS_HERO]),
            category: Category::Wrapping,
            features: strings(&[
                "Organic cotton base",
                "Natural beeswax coating",
                "Reusable up to 1 year",
                "Various pattern designs",
                "Self-adhesive properties",
            ]),
            sustainability: Sustainability {
                biodegradable: true,
                recyclable: false,
                compostable: true,
                certifications: strings(&["GOTS Certified", "Fair Trade"]),
            },
            dimensions: None,
            in_stock: true,
            featured: true,
        },
    ]
}

const FUTURE_OF_PACKAGING: &str = r#"
# The Future of Sustainable Packaging: Trends for 2024

The packaging industry is undergoing a revolutionary transformation as businesses and consumers alike demand more environmentally responsible solutions. As we look toward 2024, several key trends are shaping the future of sustainable packaging.

## Plant-Based Materials Leading the Way

One of the most exciting developments is the rise of plant-based packaging materials. From seaweed-based films to mushroom packaging, these innovations offer biodegradable alternatives that break down naturally without harming the environment.

## Circular Economy Principles

More companies are adopting circular economy principles, designing packaging that can be reused, recycled, or composted. This approach minimizes waste and maximizes resource efficiency.

## Smart Packaging Integration

Technology is playing an increasingly important role in sustainable packaging. Smart labels and QR codes help consumers understand how to properly dispose of packaging materials.

## Consumer Education and Engagement

Successful sustainable packaging initiatives require consumer buy-in. Companies are investing in education campaigns to help customers understand the environmental benefits of their packaging choices.

The future of packaging is bright, and sustainability is no longer an option. It is a necessity for businesses that want to thrive in the modern marketplace.
"#;

const CHOOSING_BIODEGRADABLE: &str = r#"
# How to Choose the Right Biodegradable Packaging for Your Business

Selecting the right biodegradable packaging for your business requires careful consideration of multiple factors. This guide will help you make informed decisions that benefit both your bottom line and the environment.

## Assess Your Product Requirements

Start by evaluating your specific product needs:
- Protection level required
- Shelf life considerations
- Storage conditions
- Transportation requirements

## Understand Different Material Options

Various biodegradable materials offer different benefits:
- **Cardboard**: Excellent for shipping boxes
- **Cornstarch**: Great for food containers
- **Bamboo**: Ideal for utensils and plates
- **Seaweed**: Perfect for wrapping materials

## Consider Your Customer Base

Your customers' values and expectations play a crucial role in packaging selection. Today's consumers increasingly prefer brands that demonstrate environmental responsibility.

## Evaluate Cost Implications

While sustainable packaging may have higher upfront costs, consider long-term benefits including brand loyalty, reduced waste disposal fees, and potential tax incentives.

## Implementation Strategy

Roll out sustainable packaging gradually, starting with your most popular products and gathering customer feedback along the way.
"#;

const COMPOSTABLE_SCIENCE: &str = r#"
# The Science Behind Compostable Packaging Materials

Understanding the science behind compostable packaging helps us appreciate the innovation and engineering that goes into creating these eco-friendly solutions.

## What Makes Packaging Compostable?

Compostability depends on the molecular structure of materials and how microorganisms can break them down:

### Polymer Chains
Traditional plastics have strong polymer chains that resist decomposition. Compostable materials use weaker bonds that microorganisms can easily break.

### Microbial Action
Specific bacteria and fungi in compost environments produce enzymes that break down compostable materials into water, CO2, and organic matter.

## Testing Standards

Compostable packaging must meet strict standards:
- **ASTM D6400**: American standard for compostability
- **EN 13432**: European standard for compostability
- **AS 4736**: Australian standard for compostability

## Time and Conditions

Most compostable packaging breaks down within 90-180 days under proper composting conditions:
- Temperature: 50-60°C
- Humidity: 50-60%
- Adequate oxygen levels
- Proper carbon-nitrogen ratio

## Environmental Benefits

When properly composted, these materials contribute to soil health by adding organic matter and nutrients, completing the natural cycle.
"#;

pub fn blog_posts() -> DomainResult<Vec<BlogPost>> {
    Ok(vec![
        BlogPost {
            id: PostId::new("1"),
            title: "The Future of Sustainable Packaging: Trends for 2024".to_string(),
            slug: Slug::parse("future-sustainable-packaging-2024")?,
            excerpt: "Discover the latest innovations in eco-friendly packaging and how businesses are leading the charge toward a circular economy.".to_string(),
            content: FUTURE_OF_PACKAGING.to_string(),
            author: Author {
                name: "Sarah Green".to_string(),
                avatar: TEAM_HERO.to_string(),
                bio: "Sustainable packaging expert with 10+ years in environmental design".to_string(),
            },
            published_at: date(2024, 1, 15)?,
            read_time: 5,
            tags: strings(&["sustainability", "innovation", "trends", "circular-economy"]),
            image: HOME_HERO.to_string(),
            featured: true,
        },
        BlogPost {
            id: PostId::new("2"),
            title: "How to Choose the Right Biodegradable Packaging for Your Business".to_string(),
            slug: Slug::parse("choose-biodegradable-packaging-business")?,
            excerpt: "A comprehensive guide to selecting sustainable packaging solutions that align with your business needs and environmental goals.".to_string(),
            content: CHOOSING_BIODEGRADABLE.to_string(),
            author: Author {
                name: "Mike Thompson".to_string(),
                avatar: TEAM_HERO.to_string(),
                bio: "Business sustainability consultant and packaging strategist".to_string(),
            },
            published_at: date(2024, 1, 10)?,
            read_time: 7,
            tags: strings(&["business", "biodegradable", "selection-guide", "strategy"]),
            image: PRODUCTS_HERO.to_string(),
            featured: false,
        },
        BlogPost {
            id: PostId::new("3"),
            title: "The Science Behind Compostable Packaging Materials".to_string(),
            slug: Slug::parse("science-compostable-packaging-materials")?,
            excerpt: "Explore the fascinating science that makes packaging materials break down naturally and return nutrients to the soil.".to_string(),
            content: COMPOSTABLE_SCIENCE.to_string(),
            author: Author {
                name: "Dr. Emma Wilson".to_string(),
                avatar: TEAM_HERO.to_string(),
                bio: "Materials scientist specializing in biodegradable polymers".to_string(),
            },
            published_at: date(2024, 1, 5)?,
            read_time: 6,
            tags: strings(&["science", "compostable", "materials", "environment"]),
            image: HOME_HERO.to_string(),
            featured: true,
        },
    ])
}

fn member(
    id: &str,
    name: &str,
    position: &str,
    bio: &str,
    linkedin: &str,
    twitter: Option<&str>,
    email: &str,
) -> TeamMember {
    TeamMember {
        id: MemberId::new(id),
        name: name.to_string(),
        position: position.to_string(),
        bio: bio.to_string(),
        image: TEAM_HERO.to_string(),
        social: SocialLinks {
            linkedin: Some(linkedin.to_string()),
            twitter: twitter.map(str::to_string),
            email: Some(email.to_string()),
        },
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            "1",
            "Sarah Green",
            "CEO & Founder",
            "Environmental engineer turned entrepreneur with a passion for sustainable solutions. Sarah founded EcoSprout after 15 years in traditional packaging, determined to create a better future for our planet.",
            "https://linkedin.com/in/sarahgreen",
            Some("https://twitter.com/sarahgreen"),
            "sarah@ecosprout.com",
        ),
        member(
            "2",
            "Mike Thompson",
            "Head of Sustainability",
            "Leading our mission to minimize environmental impact through innovative packaging solutions. Mike brings 12 years of experience in sustainable business practices and circular economy principles.",
            "https://linkedin.com/in/mikethompson",
            None,
            "mike@ecosprout.com",
        ),
        member(
            "3",
            "Dr. Emma Wilson",
            "Chief Technology Officer",
            "Materials scientist with expertise in biodegradable polymers and packaging innovation. Emma leads our R&D efforts to develop next-generation sustainable packaging materials.",
            "https://linkedin.com/in/emmawilson",
            None,
            "emma@ecosprout.com",
        ),
        member(
            "4",
            "James Rodriguez",
            "Head of Operations",
            "Ensuring our sustainable packaging reaches customers efficiently while maintaining our commitment to environmental responsibility. James optimizes our supply chain for minimal ecological impact.",
            "https://linkedin.com/in/jamesrodriguez",
            None,
            "james@ecosprout.com",
        ),
    ]
}
