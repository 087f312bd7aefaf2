// WebAssembly bindings for the browser front-end
use crate::calc;
use crate::config::Config;
use crate::convert::Converter;
use crate::tools;
use js_sys::Array;
use wasm_bindgen::prelude::*;

fn js_err<E: std::fmt::Display>(context: &str) -> impl Fn(E) -> JsValue + '_ {
    move |e| JsValue::from_str(&format!("{}: {}", context, e))
}

#[wasm_bindgen]
pub struct OmniToolsWasm {
    converter: Converter,
    password_length: usize,
}

impl Default for OmniToolsWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl OmniToolsWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            converter: Converter::new(),
            password_length: tools::password::DEFAULT_LENGTH,
        }
    }

    /// Build from TOML config text (currency rates, extra categories, ...)
    #[wasm_bindgen]
    pub fn from_config(config_content: &str) -> Result<OmniToolsWasm, JsValue> {
        let config = Config::load_from_str(config_content).map_err(js_err("Failed to load config"))?;
        let converter = config
            .build_converter()
            .map_err(js_err("Invalid config"))?;
        Ok(Self {
            converter,
            password_length: config.password.length,
        })
    }

    /// Category names in display order
    #[wasm_bindgen]
    pub fn categories(&self) -> Array {
        self.converter
            .categories()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    /// Unit names of a category in display order
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<Array, JsValue> {
        let units = self
            .converter
            .units(category)
            .map_err(js_err("Failed to list units"))?;
        Ok(units.iter().map(|u| JsValue::from_str(u)).collect())
    }

    /// Convert typed text; returns the display string ("---" for bad input)
    #[wasm_bindgen]
    pub fn convert(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        input: &str,
    ) -> Result<String, JsValue> {
        let result = self
            .converter
            .convert(category, from_unit, to_unit, input)
            .map_err(js_err("Conversion error"))?;
        Ok(result.to_string())
    }

    /// Convert typed text; returns the result as JSON
    /// ({"status": "value", "value": ..., "precision": ...} or {"status": "unavailable"})
    #[wasm_bindgen]
    pub fn convert_json(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        input: &str,
    ) -> Result<String, JsValue> {
        let result = self
            .converter
            .convert(category, from_unit, to_unit, input)
            .map_err(js_err("Conversion error"))?;
        serde_json::to_string(&result).map_err(js_err("Failed to serialize result"))
    }

    /// Evaluate a calculator expression to its display string
    #[wasm_bindgen]
    pub fn evaluate(&self, expression: &str) -> Result<String, JsValue> {
        let value = calc::evaluate(expression).map_err(js_err("Calculation error"))?;
        Ok(calc::format_result(value))
    }

    #[wasm_bindgen]
    pub fn generate_password(&self, length: Option<usize>) -> Result<String, JsValue> {
        tools::generate_password(length.unwrap_or(self.password_length))
            .map_err(js_err("Password error"))
    }

    /// Returns JSON {"tip", "total", "per_person"}
    #[wasm_bindgen]
    pub fn split_tip(&self, bill: f64, tip_percent: f64, people: u32) -> Result<String, JsValue> {
        let split = tools::split_tip(bill, tip_percent, people).map_err(js_err("Tip error"))?;
        serde_json::to_string(&split).map_err(js_err("Failed to serialize result"))
    }

    /// mode: "add" or "remove"; returns JSON {"gst", "net"}
    #[wasm_bindgen]
    pub fn gst(&self, amount: &str, rate: &str, mode: &str) -> Result<String, JsValue> {
        let mode = match mode {
            "add" => tools::GstMode::Add,
            "remove" => tools::GstMode::Remove,
            other => return Err(JsValue::from_str(&format!("Unknown GST mode: {}", other))),
        };
        let result = tools::gst_from_text(amount, rate, mode);
        serde_json::to_string(&result).map_err(js_err("Failed to serialize result"))
    }

    /// Returns JSON {"value", "band"}, or null for invalid inputs
    #[wasm_bindgen]
    pub fn bmi(&self, weight_kg: f64, height_cm: f64) -> Result<String, JsValue> {
        let result = tools::bmi(weight_kg, height_cm);
        serde_json::to_string(&result).map_err(js_err("Failed to serialize result"))
    }

    /// birth: YYYY-MM-DD; returns JSON {"years", "months", "days"}
    #[wasm_bindgen]
    pub fn age(&self, birth: &str) -> Result<String, JsValue> {
        let birth = tools::parse_date(birth).map_err(js_err("Age error"))?;
        let age = tools::age_today(birth).map_err(js_err("Age error"))?;
        serde_json::to_string(&age).map_err(js_err("Failed to serialize result"))
    }
}
