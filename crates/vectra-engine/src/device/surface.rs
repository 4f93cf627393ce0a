//! Pure surface decisions, kept apart from the wgpu objects they configure.

use super::SurfaceErrorAction;

/// First format whose sRGB-ness matches `prefer_srgb`, else the first supported one.
pub(crate) fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or_else(|| formats.first().copied())
}

/// Compositing mode for the surface.
///
/// A transparent drawable needs one of the blending modes; when the surface
/// offers none the clear color's alpha has no visible effect.
pub(crate) fn pick_alpha_mode(
    modes: &[wgpu::CompositeAlphaMode],
    transparent: bool,
) -> wgpu::CompositeAlphaMode {
    use wgpu::CompositeAlphaMode as M;

    let wanted: &[M] = if transparent {
        &[M::PreMultiplied, M::PostMultiplied, M::Inherit]
    } else {
        &[M::Opaque]
    };

    if let Some(mode) = wanted.iter().copied().find(|m| modes.contains(m)) {
        return mode;
    }
    if transparent {
        log::warn!("surface offers no blending alpha mode; clear alpha is ignored");
    }
    modes.first().copied().unwrap_or(M::Auto)
}

/// What to do after `get_current_texture` failed.
pub(crate) fn action_for(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::CompositeAlphaMode as M;
    use wgpu::TextureFormat as F;

    #[test]
    fn srgb_format_preferred() {
        let formats = [F::Bgra8Unorm, F::Rgba16Float, F::Bgra8UnormSrgb];
        assert_eq!(pick_format(&formats, true), Some(F::Bgra8UnormSrgb));
        assert_eq!(pick_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn format_falls_back_to_first() {
        assert_eq!(pick_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
        assert_eq!(pick_format(&[], true), None);
    }

    #[test]
    fn transparent_surface_picks_blending_mode() {
        assert_eq!(pick_alpha_mode(&[M::Opaque, M::PostMultiplied], true), M::PostMultiplied);
        assert_eq!(pick_alpha_mode(&[M::Opaque, M::PostMultiplied], false), M::Opaque);
        assert_eq!(pick_alpha_mode(&[M::Opaque], true), M::Opaque);
        assert_eq!(pick_alpha_mode(&[], false), M::Auto);
    }

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(action_for(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(action_for(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(action_for(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(action_for(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
