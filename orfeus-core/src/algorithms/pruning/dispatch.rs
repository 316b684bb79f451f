use std::fmt;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::algorithms::pruning::kernel::skippable_with;
use crate::algorithms::pruning::lanes::Scalar;
use crate::constants::{NARROW_LANES, SCALAR_LANES, WIDE_LANES};
use crate::node::NodeAttributes;
use crate::types::OrfeusError;

/// Instruction set a [`PruningKernel`] runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelBackend {
    /// 32 lanes
    Avx2,
    /// 16 lanes
    Sse2,
    /// 16 lanes
    Neon,
    /// Scalar fallback, one lane
    Generic,
}

impl KernelBackend {
    /// Every backend, widest first
    pub const ALL: [Self; 4] = [Self::Avx2, Self::Sse2, Self::Neon, Self::Generic];

    /// Nodes evaluated per batch
    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Self::Avx2 => WIDE_LANES,
            Self::Sse2 | Self::Neon => NARROW_LANES,
            Self::Generic => SCALAR_LANES,
        }
    }

    /// Whether the running CPU can execute this backend
    #[must_use]
    pub fn is_supported(self) -> bool {
        match self {
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::Avx2 => is_x86_feature_detected!("avx2"),
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            Self::Sse2 => is_x86_feature_detected!("sse2"),
            #[cfg(target_arch = "aarch64")]
            Self::Neon => std::arch::is_aarch64_feature_detected!("neon"),
            Self::Generic => true,
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }

    /// Widest backend the running CPU supports
    #[must_use]
    pub fn detect() -> Self {
        Self::ALL
            .into_iter()
            .find(|backend| backend.is_supported())
            .unwrap_or(Self::Generic)
    }
}

impl fmt::Display for KernelBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Avx2 => "avx2",
            Self::Sse2 => "sse2",
            Self::Neon => "neon",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}

type SkipFn = fn(&NodeAttributes<'_>, usize, usize, &mut [u8]);

/// A skip kernel bound to one backend.
///
/// Constructing one checks the backend against the CPU, so [`skippable`]
/// never reaches an instruction the CPU lacks.
///
/// [`skippable`]: PruningKernel::skippable
#[derive(Clone, Copy)]
pub struct PruningKernel {
    backend: KernelBackend,
    skippable: SkipFn,
}

impl PruningKernel {
    /// Kernel for `backend`, or an error if the CPU cannot run it
    pub fn new(backend: KernelBackend) -> Result<Self, OrfeusError> {
        if backend.is_supported() {
            Ok(Self::bind(backend))
        } else {
            Err(OrfeusError::UnsupportedBackend(backend))
        }
    }

    /// Kernel for the widest backend the CPU supports
    #[must_use]
    pub fn detect() -> Self {
        Self::bind(KernelBackend::detect())
    }

    /// Kernel for `backend`, or the process-wide kernel if the CPU cannot run it
    #[must_use]
    pub fn with_fallback(backend: KernelBackend) -> Self {
        Self::new(backend).unwrap_or_else(|_| {
            let kernel = *Self::global();
            warn!(
                requested = %backend,
                selected = %kernel.backend,
                "pruning backend not supported by this CPU, falling back"
            );
            kernel
        })
    }

    /// The process-wide kernel, probed once on first use
    pub fn global() -> &'static Self {
        static KERNEL: OnceLock<PruningKernel> = OnceLock::new();
        KERNEL.get_or_init(|| {
            let kernel = Self::detect();
            info!(
                backend = %kernel.backend,
                lanes = kernel.lanes(),
                "selected pruning backend"
            );
            kernel
        })
    }

    fn bind(backend: KernelBackend) -> Self {
        let skippable: SkipFn = match backend {
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            KernelBackend::Avx2 => x86::skippable_avx2,
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            KernelBackend::Sse2 => x86::skippable_sse2,
            #[cfg(target_arch = "aarch64")]
            KernelBackend::Neon => aarch64::skippable_neon,
            _ => skippable_with::<Scalar>,
        };
        Self { backend, skippable }
    }

    #[must_use]
    pub const fn backend(&self) -> KernelBackend {
        self.backend
    }

    #[must_use]
    pub const fn lanes(&self) -> usize {
        self.backend.lanes()
    }

    /// Fill `skip[j - min]` for every predecessor `j` in `min..i` of node `i`.
    ///
    /// Preconditions: `min <= i < nodes.len()` and `skip.len() >= i - min`.
    #[inline]
    pub fn skippable(&self, nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        (self.skippable)(nodes, min, i, skip);
    }
}

impl fmt::Debug for PruningKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PruningKernel")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PruningKernel {
    fn eq(&self, other: &Self) -> bool {
        self.backend == other.backend
    }
}

impl Eq for PruningKernel {}

/// Fill skip flags through the process-wide kernel.
///
/// See [`PruningKernel::skippable`].
#[inline]
pub fn skippable(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
    PruningKernel::global().skippable(nodes, min, i, skip);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86 {
    use wide::{u8x16, u8x32};

    use crate::algorithms::pruning::kernel::skippable_with;
    use crate::node::NodeAttributes;

    #[target_feature(enable = "avx2")]
    unsafe fn skippable_avx2_impl(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        skippable_with::<u8x32>(nodes, min, i, skip);
    }

    #[target_feature(enable = "sse2")]
    unsafe fn skippable_sse2_impl(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        skippable_with::<u8x16>(nodes, min, i, skip);
    }

    pub(super) fn skippable_avx2(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        // SAFETY: only bound after `is_x86_feature_detected!("avx2")` succeeded
        unsafe { skippable_avx2_impl(nodes, min, i, skip) }
    }

    pub(super) fn skippable_sse2(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        // SAFETY: only bound after `is_x86_feature_detected!("sse2")` succeeded
        unsafe { skippable_sse2_impl(nodes, min, i, skip) }
    }
}

#[cfg(target_arch = "aarch64")]
mod aarch64 {
    use wide::u8x16;

    use crate::algorithms::pruning::kernel::skippable_with;
    use crate::node::NodeAttributes;

    #[target_feature(enable = "neon")]
    unsafe fn skippable_neon_impl(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        skippable_with::<u8x16>(nodes, min, i, skip);
    }

    pub(super) fn skippable_neon(nodes: &NodeAttributes<'_>, min: usize, i: usize, skip: &mut [u8]) {
        // SAFETY: only bound after `is_aarch64_feature_detected!("neon")` succeeded
        unsafe { skippable_neon_impl(nodes, min, i, skip) }
    }
}
