//! Which fields the global search scans

/// Fields scanned by the global search
///
/// The default scans every field of the row, including fields that belong
/// to hidden columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GlobalSearchScope {
	/// Scan every field the row carries
	#[default]
	AllFields,
	/// Scan only the listed fields
	Fields(Vec<String>),
}

impl GlobalSearchScope {
	/// Restricts the scan to `fields`
	pub fn fields<I, S>(fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Fields(fields.into_iter().map(Into::into).collect())
	}

	/// Returns true if `field` is scanned
	pub fn includes(&self, field: &str) -> bool {
		match self {
			Self::AllFields => true,
			Self::Fields(fields) => fields.iter().any(|f| f == field),
		}
	}
}
