/// Integration test target exercising the full store-to-engine workflow
