//! Rendering of the payment notification document.

use chrono::{Local, NaiveDate};

use crate::models::voucher::VoucherData;

const CONDO_NAME: &str = "Condominio Estancias de San Joaquin";
const ASSUMED_BANK: &str = "BAC Credomatic (Asumido)";
const MISSING: &str = "N/A";

/// Renders the fixed notification template from extracted voucher fields.
///
/// Pure function of its input and the clock: when the voucher carries no
/// date, the current date is substituted at render time. Tests pin the
/// clock with [`NotificationRenderer::with_fixed_date`]; everything else is
/// byte-identical across calls for the same input.
pub struct NotificationRenderer {
    fixed_date: Option<NaiveDate>,
}

impl NotificationRenderer {
    pub fn new() -> Self {
        Self { fixed_date: None }
    }

    /// Use a fixed date instead of the system clock for the missing-date
    /// fallback.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    /// Render the notification document.
    pub fn render(&self, data: &VoucherData) -> String {
        let date = data.date.clone().unwrap_or_else(|| self.today());

        // The parser guarantees both, but the template defends anyway
        let owner = data.name.as_deref().unwrap_or(MISSING);
        let filial = data.filial.as_deref().unwrap_or(MISSING);

        let amount = format!(
            "{} {}",
            data.amount.as_deref().unwrap_or(MISSING),
            data.currency.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        let account = data.account.as_deref().unwrap_or(MISSING);
        let reference = data.reference.as_deref().unwrap_or(MISSING);
        let concept = data.concept.as_deref().unwrap_or(MISSING);

        format!(
            "# Notificación de Pago de Mantenimiento\n\
             \n\
             **Para:** Administración del {CONDO_NAME}\n\
             \n\
             **De:** {owner}, Propietario de Filial #{filial}\n\
             \n\
             **Fecha:** {date}\n\
             \n\
             Por medio de la presente, se notifica que se ha realizado el pago por \
             concepto de mantenimiento del condominio, según los siguientes detalles:\n\
             \n\
             ## Información del Pago\n\
             \n\
             - **Método de Pago:** SINPE MÓVIL\n\
             - **Propietario:** {owner}\n\
             - **Filial:** #{filial}\n\
             - **Monto:** {amount}\n\
             - **Fecha y Hora de la Transacción:** {date} (Nota: Hora no disponible en el comprobante)\n\
             - **Número de Referencia:** {reference}\n\
             - **Concepto:** {concept}\n\
             \n\
             ## Detalles de la Transacción\n\
             \n\
             - **Cuenta Origen:** {account}\n\
             - **Banco:** {ASSUMED_BANK}\n\
             \n\
             Se solicita amablemente confirmar la recepción de este pago y aplicarlo a \
             la cuenta correspondiente de la Filial #{filial}.\n\
             \n\
             Para cualquier consulta adicional o aclaración, favor comunicarse con el \
             propietario.\n\
             \n\
             Atentamente,\n\
             \n\
             {owner}\n\
             Propietario Filial #{filial}\n\
             {CONDO_NAME}"
        )
    }

    fn today(&self) -> String {
        self.fixed_date
            .unwrap_or_else(|| Local::now().date_naive())
            .format("%d/%m/%Y")
            .to_string()
    }
}

impl Default for NotificationRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_data() -> VoucherData {
        VoucherData {
            date: Some("05/03/2024".to_string()),
            account: Some("CR999".to_string()),
            name: Some("Maria Lopez".to_string()),
            amount: Some("50000.00".to_string()),
            currency: Some("CRC".to_string()),
            reference: Some("123456".to_string()),
            concept: Some("Mantenimiento Filial 30".to_string()),
            filial: Some("30".to_string()),
        }
    }

    #[test]
    fn test_render_full_voucher() {
        let doc = NotificationRenderer::new().render(&full_data());

        assert!(doc.contains("**Fecha:** 05/03/2024"));
        assert!(doc.contains("**Propietario:** Maria Lopez"));
        assert!(doc.contains("**Filial:** #30"));
        assert!(doc.contains("**Monto:** 50000.00 CRC"));
        assert!(doc.contains("**Número de Referencia:** 123456"));
        assert!(doc.contains("**Cuenta Origen:** CR999"));
        assert!(doc.contains("**Banco:** BAC Credomatic (Asumido)"));
        assert!(doc.contains("De:** Maria Lopez, Propietario de Filial #30"));
    }

    #[test]
    fn test_missing_fields_render_as_na() {
        let data = VoucherData {
            name: Some("Giovanni Mora Castillo".to_string()),
            filial: Some("25".to_string()),
            ..Default::default()
        };

        let doc = NotificationRenderer::new()
            .with_fixed_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .render(&data);

        assert!(doc.contains("**Monto:** N/A"));
        assert!(doc.contains("**Número de Referencia:** N/A"));
        assert!(doc.contains("**Concepto:** N/A"));
        assert!(doc.contains("**Cuenta Origen:** N/A"));
        assert!(doc.contains("**Propietario:** Giovanni Mora Castillo"));
        assert!(doc.contains("**Filial:** #25"));
    }

    #[test]
    fn test_missing_amount_trims_trailing_currency_space() {
        let data = VoucherData {
            amount: None,
            currency: None,
            ..Default::default()
        };
        let doc = NotificationRenderer::new()
            .with_fixed_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .render(&data);

        assert!(doc.contains("**Monto:** N/A\n"));
        assert!(!doc.contains("**Monto:** N/A \n"));
    }

    #[test]
    fn test_render_is_idempotent_for_same_input() {
        let renderer = NotificationRenderer::new();
        let data = full_data();

        assert_eq!(renderer.render(&data), renderer.render(&data));
    }

    #[test]
    fn test_missing_date_uses_injected_clock() {
        let data = VoucherData::default();
        let doc = NotificationRenderer::new()
            .with_fixed_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
            .render(&data);

        assert!(doc.contains("**Fecha:** 31/12/2024"));
        assert!(doc.contains(
            "**Fecha y Hora de la Transacción:** 31/12/2024 (Nota: Hora no disponible en el comprobante)"
        ));
    }
}
