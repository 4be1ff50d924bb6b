use super::segment::{ParamToken, Segment};
use super::{GLOB, SLASH};
use crate::config::AnalyzerTokens;

/// Segment composition of a route string, used to rank routes by specificity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteAnalysis {
    pub number_of_static_segments_beginning: usize,
    #[cfg_attr(feature = "serde", serde(rename = "numberOfStaticSegements"))]
    pub number_of_static_segments: usize,
    pub number_of_parameter_segments: usize,
    pub is_catch_all: bool,
}

impl RouteAnalysis {
    pub(super) fn compute(route: &str, tokens: AnalyzerTokens) -> Self {
        let is_param = |part: &str| {
            let segment = Segment::classify(part);
            match tokens {
                AnalyzerTokens::All => segment.is_param(),
                AnalyzerTokens::Legacy => matches!(
                    segment,
                    Segment::Param {
                        token: ParamToken::Old,
                        ..
                    }
                ),
            }
        };

        let mut analysis = Self {
            is_catch_all: route.ends_with(GLOB),
            ..Self::default()
        };
        let mut leading = true;

        for part in route.split(SLASH).filter(|&p| !p.is_empty() && p != GLOB) {
            if is_param(part) {
                leading = false;
                analysis.number_of_parameter_segments += 1;
            } else {
                if leading {
                    analysis.number_of_static_segments_beginning += 1;
                }
                analysis.number_of_static_segments += 1;
            }
        }

        analysis
    }
}
