pub mod transformers;

use std::borrow::Cow;

use common_utils::{
    errors::CustomResult,
    request::{Method, Request, RequestBuilder, RequestContent},
    types::{AmountConvertor, StringMinorUnit, StringMinorUnitForConnector},
};
use error_stack::ResultExt;
use gateway_domain_models::{router_data::RouterData, router_response_types::GatewayResponse};
use gateway_interfaces::{
    api::{ConnectorCommon, ConnectorIntegration},
    configs::Connectors,
    errors,
    types::Response,
};
use masking::{FormScrubber, RedactionRule};
use router_env::logger;
use transformers as paystation;

use crate::utils;

const REDACTED_FIELDS: &[RedactionRule] = &[
    RedactionRule::filtered(paystation::paystation_constants::CARD_NUMBER_FIELD),
    RedactionRule::filtered(paystation::paystation_constants::CARD_SECURITY_CODE_FIELD),
];

const SCRUBBER: FormScrubber = FormScrubber::new(REDACTED_FIELDS);

#[derive(Clone)]
pub struct Paystation {
    amount_converter: &'static (dyn AmountConvertor<Output = StringMinorUnit> + Sync),
}

impl Paystation {
    pub fn new() -> &'static Self {
        &Self {
            amount_converter: &StringMinorUnitForConnector,
        }
    }
}

impl ConnectorCommon for Paystation {
    fn id(&self) -> &'static str {
        paystation::paystation_constants::CONNECTOR_NAME
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.paystation.base_url.as_ref()
    }

    fn supports_scrubbing(&self) -> bool {
        true
    }

    fn scrub<'a>(&self, body: &'a str) -> Cow<'a, str> {
        SCRUBBER.scrub(body)
    }
}

impl ConnectorIntegration for Paystation {
    fn get_url(
        &self,
        _req: &RouterData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError> {
        Ok(self.base_url(connectors).to_owned())
    }

    fn get_request_body(
        &self,
        req: &RouterData,
        _connectors: &Connectors,
    ) -> CustomResult<RequestContent, errors::ConnectorError> {
        let amount = req
            .request
            .get_minor_amount()
            .map(|amount| {
                utils::convert_amount(
                    self.amount_converter,
                    amount,
                    req.request.get_options().get_currency(),
                )
            })
            .transpose()?;

        let connector_router_data = paystation::PaystationRouterData::from((amount, req));
        let connector_req =
            paystation::PaystationPaymentsRequest::try_from(&connector_router_data)?;

        RequestContent::form_url_encoded(&connector_req.form_fields())
            .change_context(errors::ConnectorError::RequestEncodingFailed)
    }

    fn build_request(
        &self,
        req: &RouterData,
        connectors: &Connectors,
    ) -> CustomResult<Request, errors::ConnectorError> {
        Ok(RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req, connectors)?)
            .headers(self.get_headers(req, connectors)?)
            .set_body(self.get_request_body(req, connectors)?)
            .build())
    }

    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn handle_response(
        &self,
        _data: &RouterData,
        res: Response,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        let response = paystation::PaystationResponse::from_body(&res.body_text());
        logger::debug!(paystation_response = ?response);

        Ok(GatewayResponse::from(response))
    }
}
