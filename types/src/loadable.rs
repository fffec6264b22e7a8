use std::fmt::Display;

/// View state for anything fetched from the backend.
///
/// Starts out loading with an empty value. A failed fetch keeps whatever was
/// there before and only clears the loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Loadable<T> {
    pub value: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            loading: true,
            error: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        match result {
            Ok(value) => {
                self.value = value;
                self.error = None;
            }
            Err(error) => self.error = Some(error.to_string()),
        }
        self.loading = false;
    }

    pub fn is_ready(&self) -> bool {
        !self.loading
    }
}
