use crate::algorithms::pruning::{KernelBackend, PruningKernel};
use crate::genetic_code::GeneticCode;
use crate::sequence::encoded::DigitSequence;
use crate::types::OrfeusError;

/// Settings validated once before a scan starts.
///
/// The per-position readers and the pruning kernel take already-validated
/// inputs; `ScanConfig` is where the scanning layer turns user choices into
/// those inputs.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use orfeus_core::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.genetic_code()?.table(), 11);
/// # Ok::<(), orfeus_core::types::OrfeusError>(())
/// ```
///
/// ## Mycoplasma code with N-run masking
///
/// ```rust
/// use orfeus_core::config::ScanConfig;
///
/// let config = ScanConfig {
///     translation_table: Some(4),
///     mask_n_runs: true,
///     ..Default::default()
/// };
/// let sequence = config.encode(b"ATGNNNNTGA");
/// assert_eq!(sequence.masks().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Genetic code translation table number.
    ///
    /// Supported tables are 1-6, 9-16 and 21-25:
    /// - `11`: Bacterial/Archaeal (most common, default)
    /// - `4`: Mycoplasma/Spiroplasma
    /// - Others: See NCBI genetic code tables
    ///
    /// **Default**: `None` (table 11)
    pub translation_table: Option<u8>,

    /// Record runs of N characters as masked regions during encoding.
    ///
    /// **Default**: `false`
    pub mask_n_runs: bool,

    /// Force a pruning backend instead of probing the CPU.
    ///
    /// Forcing a backend the CPU lacks is an error, see
    /// [`ScanConfig::pruning_kernel`].
    ///
    /// **Default**: `None` (widest supported backend)
    pub kernel_backend: Option<KernelBackend>,
}

impl ScanConfig {
    /// The validated genetic code for this scan
    pub fn genetic_code(&self) -> Result<GeneticCode, OrfeusError> {
        self.translation_table
            .map_or(Ok(GeneticCode::default()), GeneticCode::try_from)
    }

    /// The pruning kernel for this scan
    pub fn pruning_kernel(&self) -> Result<PruningKernel, OrfeusError> {
        match self.kernel_backend {
            Some(backend) => PruningKernel::new(backend),
            None => Ok(*PruningKernel::global()),
        }
    }

    /// Encode letters, masking N runs if configured
    #[must_use]
    pub fn encode(&self, sequence: &[u8]) -> DigitSequence {
        if self.mask_n_runs {
            DigitSequence::with_masking(sequence)
        } else {
            DigitSequence::without_masking(sequence)
        }
    }
}
