use crate::error::Error;

/// Derives the canonical resource identifier from raw path parameters.
///
/// Segments are joined into a `/`-prefixed path.  The derivation is a
/// pure transformation: identical inputs always produce the identical
/// identifier.  An empty parameter list, an empty segment, or a segment
/// carrying a separator fails with [`Error::InvalidResourceParams`].
pub fn derive_resource(path_params: &[String]) -> Result<String, Error> {
    if path_params.is_empty() {
        return Err(Error::InvalidResourceParams);
    }
    path_params.iter()
        .try_fold(String::new(), |mut result, segment| {
            if segment.is_empty() || segment.contains('/') {
                return Err(Error::InvalidResourceParams);
            }
            result.push('/');
            result.push_str(segment);
            Ok(result)
        })
}
