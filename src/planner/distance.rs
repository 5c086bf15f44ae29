//! Mapping-service seam and distance table builders.

use super::types::GeoLocation;
use crate::error::DistanceError;

/// Walking-time and geocoding lookups.
///
/// Implemented by a client for a mapping service. Calls are blocking and
/// are only made while the distance tables are built, never during the
/// search itself.
pub trait DistanceProvider {
    /// Walking duration in seconds from `from` to `to`.
    fn walking_duration(&self, from: &str, to: &str) -> Result<f64, DistanceError>;

    /// Coordinates of `address`.
    fn geolocation(&self, address: &str) -> Result<GeoLocation, DistanceError>;
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for &T {
    fn walking_duration(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
        (**self).walking_duration(from, to)
    }

    fn geolocation(&self, address: &str) -> Result<GeoLocation, DistanceError> {
        (**self).geolocation(address)
    }
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for Box<T> {
    fn walking_duration(&self, from: &str, to: &str) -> Result<f64, DistanceError> {
        (**self).walking_duration(from, to)
    }

    fn geolocation(&self, address: &str) -> Result<GeoLocation, DistanceError> {
        (**self).geolocation(address)
    }
}

/// Builds the symmetric team-to-team walking matrix.
///
/// Each unordered pair is looked up once, from the lower to the higher
/// index, and mirrored. Identical addresses are 0 without a lookup.
pub fn build_distance_matrix<P: DistanceProvider + ?Sized>(
    provider: &P,
    addresses: &[&str],
) -> Result<Vec<Vec<f64>>, DistanceError> {
    let n = addresses.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            if addresses[i] == addresses[j] {
                continue;
            }
            let duration = provider.walking_duration(addresses[i], addresses[j])?;
            matrix[i][j] = duration;
            matrix[j][i] = duration;
        }
    }
    tracing::debug!(teams = n, "built walking distance matrix");
    Ok(matrix)
}

/// Walking duration from every address to the final venue.
pub fn build_final_distances<P: DistanceProvider + ?Sized>(
    provider: &P,
    addresses: &[&str],
    final_location: &str,
) -> Result<Vec<f64>, DistanceError> {
    addresses
        .iter()
        .map(|&address| {
            if address == final_location {
                Ok(0.0)
            } else {
                provider.walking_duration(address, final_location)
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::mock::LineProvider;
    use super::*;

    #[test]
    fn test_matrix_is_symmetric_with_one_lookup_per_pair() {
        let provider = LineProvider::new(&[("a", 0.0), ("b", 3.0), ("c", 10.0)]);
        let matrix = build_distance_matrix(&provider, &["a", "b", "c"]).unwrap();
        assert_eq!(
            matrix,
            vec![
                vec![0.0, 3.0, 10.0],
                vec![3.0, 0.0, 7.0],
                vec![10.0, 7.0, 0.0],
            ]
        );
        assert_eq!(provider.calls(), 3);
    }

    #[test]
    fn test_shared_address_needs_no_lookup() {
        let provider = LineProvider::new(&[("a", 0.0), ("b", 4.0)]);
        let matrix = build_distance_matrix(&provider, &["a", "a", "b"]).unwrap();
        assert_eq!(matrix[0][1], 0.0);
        assert_eq!(matrix[1][2], 4.0);
        assert_eq!(provider.calls(), 2);
    }

    #[test]
    fn test_unknown_address_propagates() {
        let provider = LineProvider::new(&[("a", 0.0)]);
        let err = build_distance_matrix(&provider, &["a", "nowhere"]).unwrap_err();
        assert_eq!(
            err,
            DistanceError::AddressNotFound {
                address: "nowhere".into()
            }
        );
    }

    #[test]
    fn test_final_distances() {
        let provider = LineProvider::new(&[("a", 0.0), ("b", 4.0), ("bar", 6.0)]);
        let distances = build_final_distances(&provider, &["a", "b", "bar"], "bar").unwrap();
        assert_eq!(distances, vec![6.0, 2.0, 0.0]);
        assert_eq!(provider.calls(), 2);
    }

    #[test]
    fn test_geolocation_via_trait_object() {
        let provider = LineProvider::new(&[("a", 1.5)]);
        let by_ref: &dyn DistanceProvider = &provider;
        assert_eq!(by_ref.geolocation("a").unwrap(), GeoLocation::new(1.5, 0.0));
    }
}
