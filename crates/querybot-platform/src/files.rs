//! File attachment interop.
//!
//! Reads a user-selected file into a Base64 data URI via FileReader, and
//! drives the browser file picker from a hidden `<input type="file">`.
//! Results land on the event bus; if the user picks a second file before the
//! first read settles, the latest read wins when the UI applies the events.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use querybot_core::event_bus::EventBus;
use querybot_types::document::DocumentInfo;
use querybot_types::event::ChatEvent;
use querybot_types::{QueryBotError, Result};

/// Read a file into a `data:<mime>;base64,...` URI.
pub async fn read_as_data_uri(file: web_sys::File) -> Result<DocumentInfo> {
    let name = file.name();
    let reader = web_sys::FileReader::new()
        .map_err(|e| QueryBotError::JsInterop(format!("{:?}", e)))?;

    let promise = file_reader_to_promise(&reader);
    reader
        .read_as_data_url(&file)
        .map_err(|e| QueryBotError::JsInterop(format!("{:?}", e)))?;

    let result = JsFuture::from(promise)
        .await
        .map_err(|e| QueryBotError::JsInterop(format!("{:?}", e)))?;
    let data_uri = result
        .as_string()
        .ok_or_else(|| QueryBotError::JsInterop("FileReader result was not a string".to_string()))?;

    Ok(DocumentInfo::new(name, data_uri))
}

/// Open the browser file picker. The selected file is read asynchronously;
/// completion arrives as `DocumentLoaded` (or `Notice` on failure) on the
/// bus. Cancelling the picker produces no event.
pub fn pick_document(bus: EventBus) -> Result<()> {
    let document = web_sys::window()
        .ok_or_else(|| QueryBotError::JsInterop("No window object".to_string()))?
        .document()
        .ok_or_else(|| QueryBotError::JsInterop("No document".to_string()))?;

    let input: web_sys::HtmlInputElement = document
        .create_element("input")
        .map_err(|e| QueryBotError::JsInterop(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| QueryBotError::JsInterop("Element is not an input".to_string()))?;
    input.set_type("file");

    let input_for_change = input.clone();
    let onchange = Closure::once(move |_: web_sys::Event| {
        let Some(file) = input_for_change.files().and_then(|list| list.get(0)) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match read_as_data_uri(file).await {
                Ok(doc) => bus.emit(ChatEvent::DocumentLoaded { document: doc }),
                Err(e) => {
                    log::warn!("File read failed: {}", e);
                    bus.emit(ChatEvent::Notice {
                        message: format!("Could not read the selected file. {}", e),
                    });
                }
            }
        });
    });
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();

    input.click();
    Ok(())
}

/// Convert a FileReader's callback API into a JS Promise for use with
/// JsFuture.
fn file_reader_to_promise(reader: &web_sys::FileReader) -> js_sys::Promise {
    let reader_for_result = reader.clone();
    let reader_for_callbacks = reader.clone();

    js_sys::Promise::new(&mut move |resolve, reject| {
        let reader_inner = reader_for_result.clone();
        let onload = Closure::once(move |_: web_sys::Event| {
            let _ = resolve.call1(
                &JsValue::NULL,
                &reader_inner.result().unwrap_or(JsValue::UNDEFINED),
            );
        });
        let onerror = Closure::once(move |_: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("File read failed"));
        });
        reader_for_callbacks.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader_for_callbacks.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();
    })
}
