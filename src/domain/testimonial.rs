use once_cell::sync::Lazy;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub job: String,
    pub quote: String,
}

static TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../resources/testimonials.json"))
        .expect("embedded testimonials.json is malformed.")
});

impl Testimonial {
    /// `/stories`只展示前72条
    pub const FEATURED: usize = 72;

    pub fn all() -> &'static [Testimonial] {
        &TESTIMONIALS
    }

    pub fn featured() -> &'static [Testimonial] {
        let all = Self::all();
        &all[..all.len().min(Self::FEATURED)]
    }
}
