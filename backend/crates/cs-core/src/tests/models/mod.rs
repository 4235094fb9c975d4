mod collaboration_request_status;
