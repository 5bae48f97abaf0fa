//! Conversions from caller data into plot coordinates.

/// Trait for types that can be converted into plot data.
pub trait IntoPlotData {
    /// Convert into a vector of f64 values.
    fn into_plot_data(self) -> Vec<f64>;
}

impl IntoPlotData for Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self
    }
}

macro_rules! impl_into_plot_data {
    ($($t:ty),*) => {
        $(
            impl IntoPlotData for &[$t] {
                fn into_plot_data(self) -> Vec<f64> {
                    self.iter().map(|&v| v as f64).collect()
                }
            }

            impl IntoPlotData for &Vec<$t> {
                fn into_plot_data(self) -> Vec<f64> {
                    self.as_slice().into_plot_data()
                }
            }

            impl<const N: usize> IntoPlotData for [$t; N] {
                fn into_plot_data(self) -> Vec<f64> {
                    self.as_slice().into_plot_data()
                }
            }
        )*
    };
}

impl_into_plot_data!(f64, f32, i32, i64, u32, usize);

macro_rules! impl_into_plot_data_owned {
    ($($t:ty),*) => {
        $(
            impl IntoPlotData for Vec<$t> {
                fn into_plot_data(self) -> Vec<f64> {
                    self.into_iter().map(|v| v as f64).collect()
                }
            }
        )*
    };
}

impl_into_plot_data_owned!(f32, i32, i64, u32, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!([1i32, 2, 3].into_plot_data(), vec![1.0, 2.0, 3.0]);
        assert_eq!(vec![0.5f32].into_plot_data(), vec![0.5]);
        let owned = vec![7usize, 8];
        assert_eq!((&owned).into_plot_data(), vec![7.0, 8.0]);
    }
}
