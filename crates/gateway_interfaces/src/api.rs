//! API interface

use std::{borrow::Cow, fmt, sync::Arc};

use common_utils::{
    errors::CustomResult,
    request::{Headers, Method, Request, RequestContent},
    types::MinorUnit,
};
use error_stack::ResultExt;
use gateway_domain_models::{
    payment_method_data::{Card, PaymentMethodData},
    router_data::{ConnectorAuthType, RouterData},
    router_request_types::{
        GatewayOperation, PaymentMethodTokenizationData, PaymentOptions, PaymentsAuthorizeData,
        PaymentsCaptureData, RefundsData, VerifyData,
    },
    router_response_types::GatewayResponse,
};
use masking::PeekInterface;
use router_env::{instrument, logger};

use crate::{configs::Connectors, errors, types};

/// The trait that provides the common
pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// The base URL for interacting with the connector's API.
    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    /// Whether [`ConnectorCommon::scrub`] removes every sensitive value from a request body.
    fn supports_scrubbing(&self) -> bool {
        false
    }

    /// Copy of an encoded request body that is safe to log or persist.
    fn scrub<'a>(&self, body: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(body)
    }
}

/// Turns operations into vendor requests and vendor replies into normalized responses.
pub trait ConnectorIntegration: ConnectorCommon + Sync {
    /// fn get_headers
    fn get_headers(
        &self,
        _req: &RouterData,
        _connectors: &Connectors,
    ) -> CustomResult<Headers, errors::ConnectorError> {
        Ok(vec![])
    }

    /// fn get_http_method
    fn get_http_method(&self) -> Method {
        Method::Post
    }

    /// fn get_url
    fn get_url(
        &self,
        req: &RouterData,
        connectors: &Connectors,
    ) -> CustomResult<String, errors::ConnectorError>;

    /// fn get_request_body
    fn get_request_body(
        &self,
        req: &RouterData,
        connectors: &Connectors,
    ) -> CustomResult<RequestContent, errors::ConnectorError>;

    /// fn build_request
    fn build_request(
        &self,
        req: &RouterData,
        connectors: &Connectors,
    ) -> CustomResult<Request, errors::ConnectorError>;

    /// fn handle_response
    ///
    /// Every reply the vendor sends maps to a [`GatewayResponse`]; errors are reserved for
    /// replies that cannot be read at all.
    fn handle_response(
        &self,
        data: &RouterData,
        res: types::Response,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;
}

/// A connector instance shared by every gateway using it.
pub type BoxedConnector = &'static (dyn ConnectorIntegration + Send + Sync);

/// Outbound HTTP collaborator. Implementations send the request as given and return whatever
/// body came back; they neither retry nor interpret status codes.
pub trait HttpTransport: Send + Sync {
    /// Send a `POST` request and wait for the reply.
    fn post(&self, request: &Request) -> CustomResult<types::Response, errors::HttpClientError>;
}

/// The uniform payment API.
pub trait PaymentGateway {
    /// Authorize and capture in one step.
    fn purchase(
        &self,
        amount: MinorUnit,
        payment_method: PaymentMethodData,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;

    /// Reserve funds for a later capture.
    fn authorize(
        &self,
        amount: MinorUnit,
        payment_method: PaymentMethodData,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;

    /// Capture funds reserved by an earlier authorization.
    fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;

    /// Return funds of an earlier purchase or capture.
    fn refund(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;

    /// Save a card with the vendor and obtain a token for future payments.
    fn store(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;

    /// Check a card through a zero-amount authorization.
    fn verify(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError>;
}

/// Drives one connector through an injected transport.
pub struct Gateway {
    connector: BoxedConnector,
    auth_type: ConnectorAuthType,
    connectors: Connectors,
    transport: Arc<dyn HttpTransport>,
    test_mode: bool,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("connector", &self.connector.id())
            .field("auth_type", &self.auth_type)
            .field("connectors", &self.connectors)
            .field("test_mode", &self.test_mode)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Gateway for `connector` in live mode.
    pub fn new(
        connector: BoxedConnector,
        auth_type: ConnectorAuthType,
        connectors: Connectors,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            connector,
            auth_type,
            connectors,
            transport,
            test_mode: false,
        }
    }

    /// Mark every request of this gateway as a test transaction.
    pub fn test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    /// Whether requests are sent as test transactions.
    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    #[instrument(skip_all, fields(connector = self.connector.id(), operation = %request))]
    fn execute(
        &self,
        request: GatewayOperation,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        let router_data = RouterData {
            connector: self.connector.id().to_string(),
            connector_auth_type: self.auth_type.clone(),
            request,
            connector_request_reference_id: common_utils::generate_id_with_default_len(
                self.connector.id(),
            ),
            test_mode: self.test_mode,
        };

        execute_connector_processing_step(
            self.connector,
            self.transport.as_ref(),
            &router_data,
            &self.connectors,
        )
    }
}

impl PaymentGateway for Gateway {
    fn purchase(
        &self,
        amount: MinorUnit,
        payment_method: PaymentMethodData,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        self.execute(GatewayOperation::Purchase(PaymentsAuthorizeData {
            minor_amount: amount,
            payment_method_data: payment_method,
            options,
        }))
    }

    fn authorize(
        &self,
        amount: MinorUnit,
        payment_method: PaymentMethodData,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        self.execute(GatewayOperation::Authorize(PaymentsAuthorizeData {
            minor_amount: amount,
            payment_method_data: payment_method,
            options,
        }))
    }

    fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        self.execute(GatewayOperation::Capture(PaymentsCaptureData {
            minor_amount_to_capture: amount,
            connector_transaction_id: authorization.to_string(),
            options,
        }))
    }

    fn refund(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        self.execute(GatewayOperation::Refund(RefundsData {
            minor_refund_amount: amount,
            connector_transaction_id: authorization.to_string(),
            options,
        }))
    }

    fn store(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        self.execute(GatewayOperation::Store(PaymentMethodTokenizationData {
            card,
            options,
        }))
    }

    fn verify(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> CustomResult<GatewayResponse, errors::ConnectorError> {
        self.execute(GatewayOperation::Verify(VerifyData { card, options }))
    }
}

/// Build the connector request, send it, and turn the reply into a [`GatewayResponse`].
pub fn execute_connector_processing_step(
    connector: BoxedConnector,
    transport: &dyn HttpTransport,
    req: &RouterData,
    connectors: &Connectors,
) -> CustomResult<GatewayResponse, errors::ConnectorError> {
    let request = connector.build_request(req, connectors)?;

    if let Some(body) = request.body.as_ref() {
        if connector.supports_scrubbing() {
            logger::info!(
                url = %request.url,
                connector_request = %connector.scrub(body.get_inner_value().peek()),
            );
        } else {
            logger::info!(url = %request.url, body_length = body.len());
        }
    }

    let response = transport
        .post(&request)
        .change_context(errors::ConnectorError::ProcessingStepFailed)
        .attach_printable_lazy(|| format!("Unable to reach {}", connector.id()))?;

    logger::debug!(
        status_code = response.status_code,
        response_length = response.response.len(),
    );

    let gateway_response = connector.handle_response(req, response)?;

    logger::info!(
        success = gateway_response.success,
        authorization = ?gateway_response.authorization,
        failure = ?gateway_response.failure,
        message = %gateway_response.message,
    );

    Ok(gateway_response)
}
