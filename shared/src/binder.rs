use crate::data_url::DataUrl;
use crate::style::declarations;
use derive_more::Display;

/// Image element the binder writes previews into.
///
/// Implemented by the browser image element in the frontend and by a
/// recording fake in tests.
pub trait PreviewSurface {
    type Error;

    fn set_source(&self, src: &str) -> Result<(), Self::Error>;

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Appends the element as the last child of the file input's parent.
    /// Must be a no-op when it already is.
    fn attach(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOrigin {
    /// Matched the target selector on page load.
    Existing,
    /// Built by the binder; detached until the first successful read.
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    Bound,
    Previewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct ReadId(u64);

/// A read the caller has to run and hand back to [`PreviewBinder::complete_read`].
#[derive(Debug)]
pub struct PendingRead<F> {
    pub id: ReadId,
    pub file: F,
}

/// Looks up the preview target once a file input is known to exist.
///
/// Without an input nothing is located and no binder is built.
pub fn bind<I, S, E>(
    input: Option<I>,
    locate_target: impl FnOnce(&I) -> Result<(S, TargetOrigin), E>,
) -> Result<Option<(I, PreviewBinder<S>)>, E>
where
    S: PreviewSurface,
{
    let Some(input) = input else {
        return Ok(None);
    };
    let (surface, origin) = locate_target(&input)?;
    Ok(Some((input, PreviewBinder::new(surface, origin))))
}

pub struct PreviewBinder<S> {
    surface: S,
    origin: TargetOrigin,
    state: BinderState,
    next_read: u64,
    shown: Option<ReadId>,
}

impl<S: PreviewSurface> PreviewBinder<S> {
    pub fn new(surface: S, origin: TargetOrigin) -> Self {
        Self {
            surface,
            origin,
            state: BinderState::Bound,
            next_read: 0,
            shown: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn origin(&self) -> TargetOrigin {
        self.origin
    }

    pub fn state(&self) -> BinderState {
        self.state
    }

    /// Read whose result is currently displayed.
    pub fn shown(&self) -> Option<ReadId> {
        self.shown
    }

    /// Picks the first selected file, if any, and assigns it a read id.
    pub fn begin_read<F>(&mut self, files: impl IntoIterator<Item = F>) -> Option<PendingRead<F>> {
        let file = files.into_iter().next()?;
        let id = ReadId(self.next_read);
        self.next_read += 1;
        log::debug!("Starting preview read {}", id);
        Some(PendingRead { id, file })
    }

    /// Displays a finished read. Completions are applied in the order they
    /// arrive, so an older read finishing late replaces a newer preview.
    ///
    /// The read counts as shown once the source is written, even if styling
    /// or attaching fails afterwards.
    pub fn complete_read(&mut self, id: ReadId, url: &DataUrl) -> Result<(), S::Error> {
        if let Some(shown) = self.shown.filter(|shown| *shown > id) {
            log::warn!("Preview read {} finished after read {}; replacing it", id, shown);
        }

        self.surface.set_source(url.as_str())?;
        self.shown = Some(id);
        self.state = BinderState::Previewing;

        for (name, value) in declarations() {
            self.surface.set_style_property(name, &value)?;
        }
        self.surface.attach()?;

        log::debug!("Preview read {} applied ({})", id, url.media_type());
        Ok(())
    }
}
