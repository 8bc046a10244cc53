// SPDX-License-Identifier: MPL-2.0
//! Order payloads and the client-side order filter.
//!
//! All pricing and status fields are computed by the backend; this crate only
//! displays them.

use super::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Production statuses offered in the edit form.
pub const PRODUCTION_STATUSES: [&str; 6] = [
    "En Producción",
    "Listo para Envío",
    "En Camino",
    "Entregado",
    "Bloqueado - Sin Dirección",
    "Cancelado",
];

/// Payment statuses offered in the edit form.
pub const PAYMENT_STATUSES: [&str; 4] = ["Recibido", "Pendiente", "Parcial", "Reembolsado"];

/// Payment methods offered in the edit form.
pub const BANKS: [&str; 5] = ["Popular", "Banreservas", "BHD", "Efectivo", "Transferencia"];

/// Sales channels offered in the edit form and the orders filter.
pub const CHANNELS: [&str; 5] = ["WhatsApp", "Instagram", "Facebook", "Referido", "Tienda"];

/// Placeholder the backend stores when the shipping address is unknown.
const PENDING_ADDRESS: &str = "Pendiente";

/// One order as returned by `GET /pedidos` and `GET /pedidos/<id>`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub cliente: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub direccion: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub producto: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub talla: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub personalizacion: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub personalizacion_codigo: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub puntadas: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub precio_producto: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub precio_person: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub precio_envio: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub precio_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub costo_producto: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub costo_person: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub costo_mano_obra: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub costos_adicionales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub costo_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ganancia: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub fecha_pago: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub fecha_compromiso: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub fecha_entrega_real: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub dias_produccion: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub dias_retraso: Option<f64>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub canal: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub banco: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub estatus_produccion: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub estatus_pago: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

impl Order {
    /// False when the address is missing or still the "Pendiente" placeholder.
    #[must_use]
    pub fn has_address(&self) -> bool {
        self.direccion
            .as_deref()
            .map(str::trim)
            .is_some_and(|d| !d.is_empty() && d != PENDING_ADDRESS)
    }

    /// Profit as a percentage of the customer total, when the total is positive.
    #[must_use]
    pub fn margin_percent(&self) -> Option<f64> {
        let total = self.precio_total.filter(|t| *t > 0.0)?;
        Some(self.ganancia.unwrap_or(0.0) / total * 100.0)
    }

    /// Days late, only when the order actually is late.
    #[must_use]
    pub fn delay_days(&self) -> Option<i64> {
        self.dias_retraso
            .filter(|d| *d > 0.0)
            .map(|d| d.round() as i64)
    }
}

/// Comment attached to an order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub autor_nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub texto: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

/// File attached to an order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Attachment {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nombre_original: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tipo_mime: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub tamano_bytes: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub subido_por_nombre: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

/// Response of `GET /adjuntos/<id>/download`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DownloadLink {
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub nombre: Option<String>,
}

impl DownloadLink {
    /// The signed URL, if the backend produced a usable one.
    #[must_use]
    pub fn usable_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// `{success, error}` envelope returned by every mutating endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Outcome {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub error: Option<String>,
}

impl Outcome {
    /// Converts the envelope into a `Result`, using `fallback` when the
    /// server reported a failure without a message.
    pub fn into_result(self, fallback: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()))
        }
    }
}

/// Body of `PUT /pedidos/<id>`.
///
/// Every value is trimmed, and blank values are kept so the backend clears
/// the corresponding column.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct OrderUpdate {
    fields: BTreeMap<String, String>,
}

impl OrderUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, value: &str) {
        self.fields
            .insert(field.to_string(), value.trim().to_string());
    }

    #[must_use]
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.set(field, value);
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Client-side filter of the orders table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    /// Free-text search; matched against id, client and product
    /// case-insensitively, and against the phone number as typed.
    pub search: String,
    pub estado: Option<String>,
    pub canal: Option<String>,
}

impl OrderFilter {
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let contains = |field: Option<&str>| {
                field.is_some_and(|value| value.to_lowercase().contains(&needle))
            };
            let hit = order.id.to_lowercase().contains(&needle)
                || contains(order.cliente.as_deref())
                || contains(order.producto.as_deref())
                || order
                    .telefono
                    .as_deref()
                    .is_some_and(|phone| phone.contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(estado) = &self.estado {
            if order.estatus_produccion.as_ref() != Some(estado) {
                return false;
            }
        }

        if let Some(canal) = &self.canal {
            if order.canal.as_ref() != Some(canal) {
                return false;
            }
        }

        true
    }

    /// Returns the orders that pass the filter, preserving their order.
    #[must_use]
    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}
