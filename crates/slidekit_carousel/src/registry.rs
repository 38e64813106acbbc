//! Ordered slide storage
//!
//! The registry only stores slides. Keeping the active index consistent with
//! insertions and removals is the navigation state's job; see
//! [`NavigationState::on_inserted`](crate::navigation::NavigationState::on_inserted)
//! and [`NavigationState::on_removed`](crate::navigation::NavigationState::on_removed).

/// One carousel slide
///
/// `content` is a host-owned handle (an id, an `Arc`, a widget key); the
/// carousel never looks inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Slide<C> {
    pub content: C,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Informational only; disabled slides are still navigable
    pub enabled: bool,
}

impl<C> Slide<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            title: None,
            description: None,
            enabled: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl<C> From<C> for Slide<C> {
    fn from(content: C) -> Self {
        Slide::new(content)
    }
}

/// Ordered sequence of slides
#[derive(Clone, Debug)]
pub struct ItemRegistry<C> {
    slides: Vec<Slide<C>>,
}

impl<C> ItemRegistry<C> {
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Append a slide, returning its index
    pub fn add(&mut self, slide: Slide<C>) -> usize {
        self.slides.push(slide);
        self.slides.len() - 1
    }

    /// Insert a slide, returning where it landed
    ///
    /// Positions past the end append.
    pub fn insert(&mut self, index: usize, slide: Slide<C>) -> usize {
        let index = index.min(self.slides.len());
        self.slides.insert(index, slide);
        index
    }

    /// Remove the slide at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) -> Option<Slide<C>> {
        (index < self.slides.len()).then(|| self.slides.remove(index))
    }

    /// Remove every slide, returning how many there were
    pub fn clear(&mut self) -> usize {
        let count = self.slides.len();
        self.slides.clear();
        count
    }

    pub fn item_at(&self, index: usize) -> Option<&Slide<C>> {
        self.slides.get(index)
    }

    /// Replace the slide at `index`, returning the old one
    pub fn set_item(&mut self, index: usize, slide: Slide<C>) -> Option<Slide<C>> {
        self.slides
            .get_mut(index)
            .map(|existing| std::mem::replace(existing, slide))
    }

    /// Index of the first slide matching `predicate`
    pub fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Slide<C>) -> bool,
    {
        self.slides.iter().position(predicate)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide<C>> {
        self.slides.iter()
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl<C> Default for ItemRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C> IntoIterator for &'a ItemRegistry<C> {
    type Item = &'a Slide<C>;
    type IntoIter = std::slice::Iter<'a, Slide<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
