//! Prometheus gauges for the exporter.

use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

use crate::normalize::NormalizationFactor;
use crate::utilization::UtilizationResult;

const CATEGORY: &str = "category";

#[derive(Clone)]
pub struct UtilizationGauges {
    percent: GaugeVec,
    factor: Gauge,
}

impl UtilizationGauges {
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let percent = GaugeVec::new(
            Opts::new(
                "cpu_utilization_percent",
                "Frequency-normalized CPU utilization over the last sampling window",
            ),
            &[CATEGORY],
        )?;
        let factor = Gauge::new(
            "cpu_frequency_factor",
            "Mean current frequency over the last sampling window divided by the maximum",
        )?;
        registry.register(Box::new(percent.clone()))?;
        registry.register(Box::new(factor.clone()))?;
        Ok(Self { percent, factor })
    }

    pub fn set(&self, result: &UtilizationResult, factor: NormalizationFactor) {
        for (category, value) in [
            ("user", result.user),
            ("nice", result.nice),
            ("system", result.system),
            ("idle", result.idle),
            ("wait", result.wait),
        ] {
            self.percent.with_label_values(&[category]).set(value);
        }
        self.factor.set(factor.value());
    }
}

/// Text exposition of everything in `registry`.
pub fn encode(registry: &Registry) -> prometheus::Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
