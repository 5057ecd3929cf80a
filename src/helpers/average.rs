/// Running arithmetic mean.
#[derive(Default, Copy, Clone, Debug)]
pub struct Average {
    sum: f64,
    count: usize,
}

impl Average {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns [`None`] until at least one value has been pushed.
    pub fn average(&self) -> Option<f64> {
        (self.count != 0).then(|| self.sum / self.count as f64)
    }
}

impl Extend<f64> for Average {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for Average {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut average = Self::default();
        average.extend(iter);
        average
    }
}
