use crate::model::location::{Dataset, TimePeriod};
use crate::model::view::{view_ops, ViewDatum};

/// the application state the host UI owns: the loaded dataset plus the
/// currently selected time period. replaces the module-scope globals of
/// older map pages; the loader replaces the dataset wholesale and the
/// projector only ever reads it.
pub struct MapViewState {
    dataset: Dataset,
    period: TimePeriod,
}

impl MapViewState {
    pub fn new(dataset: Dataset, period: TimePeriod) -> Self {
        MapViewState { dataset, period }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn period(&self) -> TimePeriod {
        self.period
    }

    /// selects a new period. the next call to [`Self::view`] recomputes the
    /// whole layer; nothing is cached across switches.
    pub fn set_period(&mut self, period: TimePeriod) {
        self.period = period;
    }

    /// replaces the dataset wholesale, e.g. after a reload
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    pub fn view(&self) -> Vec<ViewDatum> {
        view_ops::project(&self.dataset, self.period)
    }
}
