// SPDX-License-Identifier: MPL-2.0
//! Product catalog and sales statistics payloads.

use super::lenient;
use serde::Deserialize;

/// Catalog product as returned by `GET /productos?all=true`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub categoria: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub precio_base: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub costo_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub margen_porcentaje: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub activo: bool,
}

/// Headline numbers from `GET /estadisticas`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Summary {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_pedidos: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ventas_totales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ganancia_neta: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub margen_promedio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pedidos_pendientes: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pedidos_entregados: Option<f64>,
}

/// One row of `GET /estadisticas/canales`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChannelSales {
    #[serde(default, deserialize_with = "lenient::text")]
    pub canal: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ventas: Option<f64>,
}

/// One row of `GET /estadisticas/estados`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StatusCount {
    #[serde(default, deserialize_with = "lenient::text")]
    pub estado: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: Option<f64>,
}

/// Everything the statistics page shows, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub summary: Summary,
    pub channels: Vec<ChannelSales>,
    pub statuses: Vec<StatusCount>,
}

/// Optional `desde`/`hasta` date range (YYYY-MM-DD) for statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub desde: Option<String>,
    pub hasta: Option<String>,
}

impl DateRange {
    /// Query pairs for the non-empty bounds.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(desde) = self.desde.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            pairs.push(("desde", desde.to_string()));
        }
        if let Some(hasta) = self.hasta.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
            pairs.push(("hasta", hasta.to_string()));
        }
        pairs
    }
}
